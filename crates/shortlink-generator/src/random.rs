use crate::error::GeneratorError;
use crate::Generator;
use rand::Rng;
use shortlink_core::{Token, ALPHABET, DEFAULT_TOKEN_LENGTH};

/// Draws every symbol of a token independently and uniformly from
/// [`ALPHABET`].
///
/// With the default length of 6 the search space is 62^6, about
/// 5.6 * 10^10 tokens.
#[derive(Debug, Clone, Copy)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    /// Creates a generator producing tokens of `length` symbols.
    pub fn new(length: usize) -> Result<Self, GeneratorError> {
        if !(Token::MIN_LENGTH..=Token::MAX_LENGTH).contains(&length) {
            return Err(GeneratorError::InvalidLength {
                length,
                min: Token::MIN_LENGTH,
                max: Token::MAX_LENGTH,
            });
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_TOKEN_LENGTH,
        }
    }
}

impl Generator for RandomGenerator {
    type Output = Token;

    fn generate(&self) -> Token {
        let mut rng = rand::rng();
        let token: String = (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Token::new_unchecked(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_length_is_six() {
        let generator = RandomGenerator::default();
        assert_eq!(generator.length(), 6);
        assert_eq!(generator.generate().as_str().len(), 6);
    }

    #[test]
    fn tokens_use_only_the_alphabet() {
        let generator = RandomGenerator::new(12).unwrap();
        for _ in 0..200 {
            let token = generator.generate();
            assert_eq!(token.as_str().len(), 12);
            // a generated token must pass the same validation as user input
            assert!(Token::new(token.as_str()).is_ok());
        }
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert_eq!(
            RandomGenerator::new(0).unwrap_err(),
            GeneratorError::InvalidLength {
                length: 0,
                min: 1,
                max: 32
            }
        );
        assert!(RandomGenerator::new(33).is_err());
        assert!(RandomGenerator::new(1).is_ok());
        assert!(RandomGenerator::new(32).is_ok());
    }

    #[test]
    fn covers_the_whole_alphabet() {
        // 62 symbols over 20k draws: missing one is astronomically unlikely
        let generator = RandomGenerator::new(1).unwrap();
        let seen: HashSet<String> = (0..20_000)
            .map(|_| generator.generate().as_str().to_owned())
            .collect();
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
