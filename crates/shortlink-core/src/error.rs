use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("invalid ttl: {0}")]
    InvalidTtl(String),
    #[error("no free token found after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
    #[error("token not found: {0}")]
    NotFound(String),
    #[error("token has expired: {0}")]
    Expired(String),
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("invalid store settings: {0}")]
    InvalidSettings(String),
}
