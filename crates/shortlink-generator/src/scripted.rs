use crate::error::GeneratorError;
use crate::Generator;
use shortlink_core::Token;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A generator that replays a fixed list of tokens, wrapping around at the
/// end.
///
/// Useful to force collisions: a script of one token collides with itself
/// on every call after the first.
#[derive(Debug)]
pub struct ScriptedGenerator {
    tokens: Vec<Token>,
    cursor: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new<I>(tokens: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        let tokens: Vec<Token> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(GeneratorError::EmptyScript);
        }
        Ok(Self {
            tokens,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Number of tokens handed out so far.
    pub fn calls(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

impl Generator for ScriptedGenerator {
    type Output = Token;

    fn generate(&self) -> Token {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.tokens[index % self.tokens.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(s: &str) -> Token {
        Token::new(s).unwrap()
    }

    #[test]
    fn replays_in_order_and_wraps() {
        let generator = ScriptedGenerator::new([token("aaaaaa"), token("bbbbbb")]).unwrap();

        assert_eq!(generator.generate().as_str(), "aaaaaa");
        assert_eq!(generator.generate().as_str(), "bbbbbb");
        assert_eq!(generator.generate().as_str(), "aaaaaa");
        assert_eq!(generator.calls(), 3);
    }

    #[test]
    fn empty_script_is_rejected() {
        let err = ScriptedGenerator::new(Vec::<Token>::new()).unwrap_err();
        assert_eq!(err, GeneratorError::EmptyScript);
    }
}
