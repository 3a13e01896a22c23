//! One puzzle attempt as a small state machine
//!
//! A session owns the secret, the attempt budget, the feedback history and the
//! keyboard colors. Every transition either applies completely or not at all.

use crate::config::{ConfigError, SessionConfig};
use crate::core::{Feedback, Word};
use crate::dictionary::Dictionary;
use crate::keyboard::{KeyColor, KeyboardColorAggregator, KeyboardState};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Reasons a guess is rejected
///
/// A rejected guess never consumes an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Guess must be exactly {expected} letters, got {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },
    #[error("Guess '{0}' must contain only letters A-Z")]
    InvalidGuessCharacters(String),
    #[error("'{0}' is not in the word list")]
    GuessNotInDictionary(String),
    #[error("The game is already {0}; start a new one")]
    SessionTerminalViolation(GameState),
}

/// A single game against one secret word
///
/// The dictionary and random source are injected so games can be replayed
/// deterministically from a seed.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_engine::config::SessionConfig;
/// use wordle_engine::core::Word;
/// use wordle_engine::dictionary::Dictionary;
/// use wordle_engine::session::{GameState, GuessSession};
///
/// let dictionary = Dictionary::from_strs(5, &["crane", "slate"]).unwrap();
/// let secret = Word::new("crane").unwrap();
/// let mut session = GuessSession::with_secret(
///     SessionConfig::default(),
///     &dictionary,
///     StdRng::seed_from_u64(1),
///     secret,
/// )
/// .unwrap();
///
/// session.submit_guess("slate").unwrap();
/// assert_eq!(session.attempts_remaining(), 5);
/// session.submit_guess("crane").unwrap();
/// assert_eq!(session.state(), GameState::Won);
/// ```
#[derive(Debug)]
pub struct GuessSession<'d, R> {
    config: SessionConfig,
    dictionary: &'d Dictionary,
    rng: R,
    secret: Word,
    attempts_remaining: usize,
    history: Vec<Feedback>,
    state: GameState,
    keyboard: KeyboardColorAggregator,
}

impl<'d, R: Rng> GuessSession<'d, R> {
    /// Start a game with a secret drawn uniformly from `dictionary`
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid or its word length
    /// differs from the dictionary's.
    pub fn new(
        config: SessionConfig,
        dictionary: &'d Dictionary,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        check_config(&config, dictionary)?;
        let secret = dictionary.sample_uniform(&mut rng).clone();
        Ok(Self::start(config, dictionary, rng, secret))
    }

    /// Start a game with a known secret
    ///
    /// The secret does not have to be a dictionary word.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid or the secret has
    /// the wrong length.
    pub fn with_secret(
        config: SessionConfig,
        dictionary: &'d Dictionary,
        rng: R,
        secret: Word,
    ) -> Result<Self, ConfigError> {
        check_config(&config, dictionary)?;
        if secret.len() != config.word_length {
            return Err(ConfigError::SecretLength {
                secret: secret.text().to_string(),
                expected: config.word_length,
            });
        }
        Ok(Self::start(config, dictionary, rng, secret))
    }

    fn start(config: SessionConfig, dictionary: &'d Dictionary, rng: R, secret: Word) -> Self {
        info!(
            word_length = config.word_length,
            max_guesses = config.max_guesses,
            "session started"
        );
        Self {
            config,
            dictionary,
            rng,
            secret,
            attempts_remaining: config.max_guesses,
            history: Vec::new(),
            state: GameState::InProgress,
            keyboard: KeyboardColorAggregator::new(),
        }
    }

    /// Score a guess against the secret and advance the game
    ///
    /// Input is case-insensitive. On success the new feedback is appended to
    /// the history, one attempt is consumed and the keyboard absorbs the
    /// colors.
    ///
    /// # Errors
    /// Returns `SessionError` without changing anything if the game is over or
    /// the guess has the wrong length, non-letters, or (under the
    /// dictionary-only rule) is unknown.
    pub fn submit_guess(&mut self, input: &str) -> Result<&Feedback, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::SessionTerminalViolation(self.state));
        }

        let word = self
            .validate_guess(input)
            .inspect_err(|e| debug!(input, error = %e, "guess rejected"))?;

        let feedback = Feedback::compute(&self.secret, &word);
        self.keyboard.absorb(&feedback);
        self.attempts_remaining -= 1;
        self.history.push(feedback);

        self.state = if word == self.secret {
            GameState::Won
        } else if self.attempts_remaining == 0 {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        debug!(
            guess = %word,
            attempts_remaining = self.attempts_remaining,
            state = %self.state,
            "guess accepted"
        );
        if self.state.is_terminal() {
            info!(
                state = %self.state,
                guesses = self.history.len(),
                "session finished"
            );
        }

        Ok(&self.history[self.history.len() - 1])
    }

    fn validate_guess(&self, input: &str) -> Result<Word, SessionError> {
        let actual = input.chars().count();
        if actual != self.config.word_length {
            return Err(SessionError::InvalidGuessLength {
                expected: self.config.word_length,
                actual,
            });
        }
        let word =
            Word::new(input).map_err(|_| SessionError::InvalidGuessCharacters(input.to_string()))?;
        if self.config.restrict_to_dictionary && !self.dictionary.contains(&word) {
            return Err(SessionError::GuessNotInDictionary(word.text().to_string()));
        }
        Ok(word)
    }

    /// Begin a fresh game against a new random secret
    ///
    /// Allowed from any state. History, attempts, keyboard colors and hints
    /// all start over.
    pub fn reset(&mut self) {
        self.secret = self.dictionary.sample_uniform(&mut self.rng).clone();
        self.attempts_remaining = self.config.max_guesses;
        self.history.clear();
        self.state = GameState::InProgress;
        self.keyboard.reset();
        info!("session reset");
    }

    /// Force a letter's key to Green
    ///
    /// The cost of a hint is settled by the caller.
    pub fn apply_hint(&mut self, letter: u8) {
        self.keyboard.apply_hint(letter);
    }

    /// Reveal a random secret letter whose key is not yet Green
    ///
    /// Returns `None` when the game is over or every secret letter already
    /// shows Green.
    pub fn reveal_hint(&mut self) -> Option<u8> {
        if self.state.is_terminal() {
            return None;
        }

        let keys = self.keyboard.current();
        let mut hidden: Vec<u8> = self
            .secret
            .letters()
            .iter()
            .copied()
            .filter(|&letter| keys.get(letter) != KeyColor::Green)
            .collect();
        hidden.sort_unstable();
        hidden.dedup();

        let letter = *hidden.choose(&mut self.rng)?;
        self.keyboard.apply_hint(letter);
        debug!(letter = %char::from(letter), "hint revealed");
        Some(letter)
    }
}

impl<'d, R> GuessSession<'d, R> {
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.config.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.config.word_length
    }

    /// Feedback for every accepted guess, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    /// Accepted guesses, oldest first
    pub fn guesses(&self) -> impl Iterator<Item = Word> + '_ {
        self.history.iter().map(Feedback::guess)
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        self.keyboard.current()
    }

    /// Whether a letter was revealed by a hint this game
    #[must_use]
    pub fn is_hinted(&self, letter: u8) -> bool {
        self.keyboard.is_hinted(letter)
    }

    /// The secret word, for revealing once the game is over
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }
}

fn check_config(config: &SessionConfig, dictionary: &Dictionary) -> Result<(), ConfigError> {
    config.validate()?;
    if config.word_length != dictionary.word_length() {
        return Err(ConfigError::DictionaryLength {
            config: config.word_length,
            dictionary: dictionary.word_length(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(5, &["crane", "slate", "cramp", "robot", "flood"]).unwrap()
    }

    fn session<'d>(
        dictionary: &'d Dictionary,
        config: SessionConfig,
        secret: &str,
    ) -> GuessSession<'d, StdRng> {
        GuessSession::with_secret(
            config,
            dictionary,
            StdRng::seed_from_u64(42),
            Word::new(secret).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn new_session_starts_in_progress() {
        let dictionary = dictionary();
        let session =
            GuessSession::new(SessionConfig::default(), &dictionary, StdRng::seed_from_u64(3))
                .unwrap();

        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.attempts_remaining(), 6);
        assert!(session.history().is_empty());
        assert!(dictionary.contains(session.secret()));
    }

    #[test]
    fn same_seed_same_secret() {
        let dictionary = dictionary();
        let a = GuessSession::new(SessionConfig::default(), &dictionary, StdRng::seed_from_u64(9))
            .unwrap();
        let b = GuessSession::new(SessionConfig::default(), &dictionary, StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn config_must_match_dictionary() {
        let dictionary = dictionary();
        let result = GuessSession::new(
            SessionConfig::default().with_word_length(6),
            &dictionary,
            StdRng::seed_from_u64(1),
        );
        assert!(matches!(
            result,
            Err(ConfigError::DictionaryLength {
                config: 6,
                dictionary: 5
            })
        ));

        let result = GuessSession::with_secret(
            SessionConfig::default(),
            &dictionary,
            StdRng::seed_from_u64(1),
            Word::new("cat").unwrap(),
        );
        assert!(matches!(result, Err(ConfigError::SecretLength { .. })));
    }

    #[test]
    fn accepted_guess_updates_everything() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, SessionConfig::default(), "robot");

        let feedback = session.submit_guess("flood").unwrap().clone();
        assert_eq!(feedback.to_string(), "F.R L.R O.Y O.G D.R");
        assert_eq!(session.attempts_remaining(), 5);
        assert_eq!(session.history(), &[feedback]);
        assert_eq!(session.keyboard().get(b'O'), KeyColor::Green);
        assert_eq!(session.keyboard().get(b'F'), KeyColor::Red);
        assert_eq!(
            session.guesses().collect::<Vec<_>>(),
            [Word::new("flood").unwrap()]
        );
    }

    #[test]
    fn lowercase_guess_accepted() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, SessionConfig::default(), "crane");
        let feedback = session.submit_guess("CrAnE").unwrap();
        assert!(feedback.colors().all(|c| c == Color::Green));
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn invalid_length_rejected_without_consuming_attempt() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, SessionConfig::default(), "crane");

        assert_eq!(
            session.submit_guess("cranes"),
            Err(SessionError::InvalidGuessLength {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(
            session.submit_guess(""),
            Err(SessionError::InvalidGuessLength {
                expected: 5,
                actual: 0
            })
        );
        assert_eq!(session.attempts_remaining(), 6);
        assert!(session.history().is_empty());
    }

    #[test]
    fn invalid_characters_rejected() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, SessionConfig::default(), "crane");

        assert!(matches!(
            session.submit_guess("cr4ne"),
            Err(SessionError::InvalidGuessCharacters(_))
        ));
        assert_eq!(session.attempts_remaining(), 6);
        assert_eq!(session.keyboard(), &KeyboardState::default());
    }

    #[test]
    fn dictionary_rule_only_when_enabled() {
        let dictionary = dictionary();

        let mut open = session(&dictionary, SessionConfig::default(), "crane");
        assert!(open.submit_guess("zzzzz").is_ok());

        let strict_config = SessionConfig::default().restrict_to_dictionary(true);
        let mut strict = session(&dictionary, strict_config, "crane");
        assert_eq!(
            strict.submit_guess("zzzzz"),
            Err(SessionError::GuessNotInDictionary("ZZZZZ".to_string()))
        );
        assert_eq!(strict.attempts_remaining(), 6);
        assert!(strict.submit_guess("slate").is_ok());
    }

    #[test]
    fn lose_then_reject() {
        let dictionary = dictionary();
        let config = SessionConfig::default().with_max_guesses(1);
        let mut session = session(&dictionary, config, "crane");

        session.submit_guess("slate").unwrap();
        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.attempts_remaining(), 0);

        assert_eq!(
            session.submit_guess("crane"),
            Err(SessionError::SessionTerminalViolation(GameState::Lost))
        );
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn win_on_last_attempt_is_win() {
        let dictionary = dictionary();
        let config = SessionConfig::default().with_max_guesses(2);
        let mut session = session(&dictionary, config, "crane");

        session.submit_guess("slate").unwrap();
        session.submit_guess("crane").unwrap();
        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn reset_starts_over() {
        let dictionary = dictionary();
        let config = SessionConfig::default().with_max_guesses(1);
        let mut session = session(&dictionary, config, "crane");
        session.submit_guess("slate").unwrap();
        session.apply_hint(b'Q');

        session.reset();
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.attempts_remaining(), 1);
        assert!(session.history().is_empty());
        assert_eq!(session.keyboard(), &KeyboardState::default());
        assert!(!session.is_hinted(b'Q'));
        assert!(dictionary.contains(session.secret()));
    }

    #[test]
    fn reveal_hint_picks_secret_letters_until_exhausted() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, SessionConfig::default(), "robot");

        let mut revealed = Vec::new();
        while let Some(letter) = session.reveal_hint() {
            assert!(session.secret().letters().contains(&letter));
            assert_eq!(session.keyboard().get(letter), KeyColor::Green);
            assert!(session.is_hinted(letter));
            revealed.push(letter);
        }

        revealed.sort_unstable();
        assert_eq!(revealed, b"BORT");
        assert_eq!(session.attempts_remaining(), 6);
    }

    #[test]
    fn reveal_hint_skips_green_letters_and_finished_games() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, SessionConfig::default(), "robot");
        session.submit_guess("flood").unwrap(); // O green

        for _ in 0..3 {
            let letter = session.reveal_hint().unwrap();
            assert_ne!(letter, b'O');
        }
        assert_eq!(session.reveal_hint(), None);

        session.submit_guess("robot").unwrap();
        assert_eq!(session.reveal_hint(), None);
    }
}
