//! Core types for the shortlink store.
//!
//! This crate provides the types shared by the token generators, the
//! store itself and the adapters built on top of it.

pub mod clock;
pub mod entry;
pub mod error;
pub mod token;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "test-util"))]
pub use clock::ManualClock;
pub use entry::{LinkEntry, LinkStats};
pub use error::{Result, StoreError};
pub use token::{Token, ALPHABET, DEFAULT_TOKEN_LENGTH};
