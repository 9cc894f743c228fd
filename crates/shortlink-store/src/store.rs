use crate::settings::StoreSettings;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::SignedDuration;
use shortlink_core::{Clock, LinkEntry, LinkStats, Result, StoreError, SystemClock, Token};
use shortlink_generator::Generator;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, trace, warn};

/// Maps generated tokens to original values until they expire.
///
/// The table is a `DashMap`, whose sharded locks let operations on
/// different tokens proceed in parallel. Every check-then-act path goes
/// through the entry API, so it runs under a single shard lock:
/// - creation checks for a live holder of the candidate and inserts
///   atomically, so two creates can never both claim one token;
/// - resolution decides between evicting and counting a click atomically,
///   so concurrent resolves of one token never race on the entry.
///
/// Expired entries are evicted lazily by [`resolve`](Self::resolve), or in
/// bulk by [`purge_expired`](Self::purge_expired). Until then they linger in
/// the table but are treated as absent.
pub struct ShortLinkStore<G, C = SystemClock> {
    entries: DashMap<Token, LinkEntry>,
    created: AtomicU64,
    generator: G,
    clock: C,
    max_attempts: u32,
}

impl<G: Generator> ShortLinkStore<G, SystemClock> {
    /// Creates a store backed by the system clock.
    pub fn new(generator: G, settings: StoreSettings) -> Result<Self> {
        Self::with_clock(generator, SystemClock, settings)
    }
}

impl<G: Generator, C: Clock> ShortLinkStore<G, C> {
    /// Creates a store that reads the time from `clock`.
    pub fn with_clock(generator: G, clock: C, settings: StoreSettings) -> Result<Self> {
        if settings.max_attempts == 0 {
            return Err(StoreError::InvalidSettings(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            entries: DashMap::with_capacity(settings.capacity),
            created: AtomicU64::new(0),
            generator,
            clock,
            max_attempts: settings.max_attempts,
        })
    }

    /// Stores `original_value` under a freshly generated token that stays
    /// resolvable for `ttl`, and returns the bare token.
    ///
    /// A candidate held by a live entry is a collision and another one is
    /// drawn, up to `max_attempts` times. A candidate held by an expired
    /// entry is reused.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidTtl`] if `ttl` is not positive or the deadline
    ///   is out of range.
    /// - [`StoreError::GenerationExhausted`] if every attempt collided.
    pub fn create_short_link(
        &self,
        original_value: impl Into<String>,
        ttl: SignedDuration,
    ) -> Result<Token> {
        if !ttl.is_positive() {
            return Err(StoreError::InvalidTtl(format!(
                "ttl must be positive, got {ttl:?}"
            )));
        }

        let now = self.clock.now();
        let expires_at = now
            .checked_add(ttl)
            .map_err(|e| StoreError::InvalidTtl(format!("deadline out of range: {e}")))?;
        let entry = LinkEntry::new(original_value.into(), now, expires_at);

        for attempt in 1..=self.max_attempts {
            let token: Token = self.generator.generate().into();

            match self.entries.entry(token.clone()) {
                Entry::Occupied(slot) if !slot.get().is_expired_at(now) => {
                    debug!(token = %token, attempt, "token collision, drawing another");
                    continue;
                }
                Entry::Occupied(mut slot) => {
                    debug!(token = %token, "reusing token of expired entry");
                    slot.insert(entry);
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }

            self.created.fetch_add(1, Ordering::SeqCst);
            info!(token = %token, expires_at = %expires_at, "created short link");
            return Ok(token);
        }

        warn!(
            attempts = self.max_attempts,
            "no free token found, giving up"
        );
        Err(StoreError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves `token` to its original value and counts a click.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if no entry holds `token`.
    /// - [`StoreError::Expired`] if the entry is past its deadline. The entry
    ///   is removed, so the next call reports `NotFound`.
    pub fn resolve(&self, token: &str) -> Result<String> {
        let now = self.clock.now();

        match self.entries.entry(Token::new_unchecked(token)) {
            Entry::Vacant(_) => {
                trace!(token, "token not found");
                Err(StoreError::NotFound(token.to_owned()))
            }
            Entry::Occupied(slot) if slot.get().is_expired_at(now) => {
                let evicted = slot.remove();
                debug!(
                    token,
                    click_count = evicted.click_count,
                    "evicted expired entry"
                );
                Err(StoreError::Expired(token.to_owned()))
            }
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                entry.click_count += 1;
                trace!(token, click_count = entry.click_count, "resolved token");
                Ok(entry.original_value.clone())
            }
        }
    }

    /// Returns a snapshot of the statistics of a live entry.
    ///
    /// `None` means no stats are available: the token is unknown or has
    /// expired. Querying never counts a click and never evicts.
    pub fn get_stats(&self, token: &str) -> Option<LinkStats> {
        let now = self.clock.now();
        let entry = self.entries.get(token)?;

        if entry.is_expired_at(now) {
            trace!(token, "no stats for expired entry");
            return None;
        }

        Some(entry.stats(entry.key().clone()))
    }

    /// Number of successful creates since the store was constructed.
    pub fn total_created(&self) -> u64 {
        self.created.load(Ordering::SeqCst)
    }

    /// Number of entries that have not expired yet.
    pub fn live_count(&self) -> usize {
        let now = self.clock.now();
        self.entries
            .iter()
            .filter(|entry| !entry.value().is_expired_at(now))
            .count()
    }

    /// Removes every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut purged = 0;

        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired_at(now);
            if !keep {
                purged += 1;
            }
            keep
        });

        debug!(purged, "purged expired entries");
        purged
    }
}

impl<G, C> std::fmt::Debug for ShortLinkStore<G, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortLinkStore")
            .field("entries", &self.entries.len())
            .field("created", &self.created.load(Ordering::SeqCst))
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}
