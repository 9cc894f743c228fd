pub mod error;
pub mod random;
pub mod scripted;

pub use error::GeneratorError;
pub use random::RandomGenerator;
pub use scripted::ScriptedGenerator;

use shortlink_core::Token;

/// Trait for generating candidate tokens.
///
/// Implementations are pure generators that don't interact with storage.
/// A candidate may collide with a live token; the store detects that on
/// insert and asks for another one.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Token>;
    /// Generates the next candidate token.
    fn generate(&self) -> Self::Output;
}
