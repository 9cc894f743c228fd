use crate::token::Token;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored link in the store's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// The value the token maps to. Opaque to the store.
    pub original_value: String,
    /// When the entry was created.
    pub created_at: Timestamp,
    /// When the entry stops resolving.
    pub expires_at: Timestamp,
    /// Number of successful resolutions.
    pub click_count: u64,
}

impl LinkEntry {
    pub fn new(original_value: String, created_at: Timestamp, expires_at: Timestamp) -> Self {
        Self {
            original_value,
            created_at,
            expires_at,
            click_count: 0,
        }
    }

    /// An entry is expired from its deadline onwards.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }

    pub fn stats(&self, token: Token) -> LinkStats {
        LinkStats {
            token,
            click_count: self.click_count,
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }
}

/// A read-only snapshot of a live entry's statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub token: Token,
    pub click_count: u64,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}
