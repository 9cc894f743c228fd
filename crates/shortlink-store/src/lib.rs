//! In-memory short link store.
//!
//! [`ShortLinkStore`] maps generated tokens to original values, counts
//! successful resolutions and expires entries lazily. Core types are
//! re-exported from `shortlink_core`.

pub mod settings;
pub mod store;

pub use settings::StoreSettings;
pub use shortlink_core::{LinkStats, StoreError, Token};
pub use store::ShortLinkStore;
