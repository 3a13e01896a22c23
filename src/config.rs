//! Game configuration

use crate::core::MAX_WORD_LENGTH;
use thiserror::Error;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default attempt budget per game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("A game needs at least one guess")]
    NoGuesses,
    #[error("Word length must be between 1 and {MAX_WORD_LENGTH}, got {0}")]
    WordLength(usize),
    #[error("Configured word length {config} does not match dictionary word length {dictionary}")]
    DictionaryLength { config: usize, dictionary: usize },
    #[error("Secret '{secret}' does not have {expected} letters")]
    SecretLength { secret: String, expected: usize },
}

/// Rules for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    /// Reject guesses that are not dictionary words
    pub restrict_to_dictionary: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
            restrict_to_dictionary: false,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn restrict_to_dictionary(mut self, restrict: bool) -> Self {
        self.restrict_to_dictionary = restrict;
        self
    }

    /// Check the configuration on its own
    ///
    /// # Errors
    /// Returns `ConfigError` if the attempt budget is zero or the word length is
    /// unsupported.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_guesses == 0 {
            return Err(ConfigError::NoGuesses);
        }
        if self.word_length == 0 || self.word_length > MAX_WORD_LENGTH {
            return Err(ConfigError::WordLength(self.word_length));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_rules() {
        let config = SessionConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_guesses, 6);
        assert!(!config.restrict_to_dictionary);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = SessionConfig::default()
            .with_word_length(6)
            .with_max_guesses(8)
            .restrict_to_dictionary(true);
        assert_eq!(config.word_length, 6);
        assert_eq!(config.max_guesses, 8);
        assert!(config.restrict_to_dictionary);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert_eq!(
            SessionConfig::default().with_max_guesses(0).validate(),
            Err(ConfigError::NoGuesses)
        );
        assert_eq!(
            SessionConfig::default().with_word_length(0).validate(),
            Err(ConfigError::WordLength(0))
        );
        assert_eq!(
            SessionConfig::default().with_word_length(16).validate(),
            Err(ConfigError::WordLength(16))
        );
    }
}
