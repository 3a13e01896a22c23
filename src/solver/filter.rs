//! Candidate filtering from observed feedback
//!
//! A word stays plausible as the secret exactly when, had it been the secret,
//! every logged guess would have produced the feedback actually observed.

use crate::core::{Feedback, FeedbackFormatError, Word};
use crate::dictionary::Dictionary;
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

/// No dictionary word agrees with the recorded feedback
///
/// Usually a transcription mistake in the feedback. Callers report it and
/// typically offer an undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No word matches the {guesses} recorded guesses; the feedback may be wrong")]
pub struct EmptyCandidateSet {
    pub guesses: usize,
}

/// Running log of (guess, feedback) pairs for one puzzle
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    word_length: usize,
    log: Vec<(Word, Feedback)>,
}

impl CandidateFilter {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            log: Vec::new(),
        }
    }

    /// Append an observed guess and its feedback
    ///
    /// # Errors
    /// Returns `FeedbackFormatError` and leaves the log untouched if the guess
    /// or feedback has the wrong length or the feedback letters do not spell
    /// the guess.
    pub fn record(&mut self, guess: Word, feedback: Feedback) -> Result<(), FeedbackFormatError> {
        if guess.len() != self.word_length {
            return Err(FeedbackFormatError::Length {
                expected: self.word_length,
                actual: guess.len(),
            });
        }
        if feedback.len() != self.word_length {
            return Err(FeedbackFormatError::TokenCount {
                expected: self.word_length,
                actual: feedback.len(),
            });
        }
        if let Some((position, (expected, actual))) = guess
            .letters()
            .iter()
            .zip(feedback.letters())
            .enumerate()
            .find(|(_, (g, f))| **g != *f)
        {
            return Err(FeedbackFormatError::LetterMismatch {
                position,
                expected: char::from(*expected),
                actual: char::from(actual),
            });
        }

        debug!(guess = %guess, feedback = %feedback, "feedback recorded");
        self.log.push((guess, feedback));
        Ok(())
    }

    /// Parse textual feedback such as `F.R L.R O.Y O.G D.R` and record it
    ///
    /// The guess is read from the token letters. The whole string is parsed
    /// before anything is recorded.
    ///
    /// # Errors
    /// Returns `FeedbackFormatError` for malformed text.
    pub fn record_text(&mut self, text: &str) -> Result<&Feedback, FeedbackFormatError> {
        let feedback = Feedback::parse(text, self.word_length)?;
        self.record(feedback.guess(), feedback)?;
        Ok(&self.log[self.log.len() - 1].1)
    }

    /// Whether `word` could still be the secret
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        word.len() == self.word_length
            && self
                .log
                .iter()
                .all(|(guess, observed)| Feedback::compute(word, guess) == *observed)
    }

    /// Every dictionary word consistent with the whole log, in dictionary order
    ///
    /// Words are checked in parallel.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::dictionary::Dictionary;
    /// use wordle_engine::solver::CandidateFilter;
    ///
    /// let dictionary = Dictionary::from_strs(5, &["robot", "rotor", "flood"]).unwrap();
    /// let mut filter = CandidateFilter::new(5);
    /// filter.record_text("F.R L.R O.Y O.G D.R").unwrap();
    ///
    /// let candidates = filter.candidates(&dictionary);
    /// assert_eq!(candidates.len(), 2);
    /// ```
    #[must_use]
    pub fn candidates<'d>(&self, dictionary: &'d Dictionary) -> Vec<&'d Word> {
        dictionary
            .words()
            .par_iter()
            .filter(|word| self.is_consistent(word))
            .collect()
    }

    /// Like `candidates`, but reports an empty result as an error
    ///
    /// # Errors
    /// Returns `EmptyCandidateSet` when no word is consistent with the log.
    pub fn check_candidates<'d>(
        &self,
        dictionary: &'d Dictionary,
    ) -> Result<Vec<&'d Word>, EmptyCandidateSet> {
        let candidates = self.candidates(dictionary);
        if candidates.is_empty() {
            let err = EmptyCandidateSet {
                guesses: self.log.len(),
            };
            debug!(guesses = err.guesses, "no candidates remain");
            return Err(err);
        }
        Ok(candidates)
    }

    /// Narrow a previous candidate set using only the newest log entry
    ///
    /// Valid when `previous` was computed from the log minus its last entry.
    #[must_use]
    pub fn narrow<'d>(&self, previous: &[&'d Word]) -> Vec<&'d Word> {
        let Some((guess, observed)) = self.log.last() else {
            return previous.to_vec();
        };

        previous
            .par_iter()
            .copied()
            .filter(|word| {
                word.len() == self.word_length && Feedback::compute(word, guess) == *observed
            })
            .collect()
    }

    /// Remove and return the newest entry
    pub fn undo(&mut self) -> Option<(Word, Feedback)> {
        self.log.pop()
    }

    /// Forget every entry
    pub fn reset(&mut self) {
        self.log.clear();
    }

    #[inline]
    #[must_use]
    pub fn log(&self) -> &[(Word, Feedback)] {
        &self.log
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(
            5,
            &[
                "crane", "slate", "irate", "crate", "grate", "trace", "robot", "rotor", "flood",
            ],
        )
        .unwrap()
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn empty_log_keeps_everything() {
        let dictionary = dictionary();
        let filter = CandidateFilter::new(5);
        assert_eq!(filter.candidates(&dictionary).len(), dictionary.len());
    }

    #[test]
    fn exact_match_leaves_one_candidate() {
        let dictionary = dictionary();
        let mut filter = CandidateFilter::new(5);
        let guess = word("irate");
        let feedback = Feedback::compute(&guess, &guess);
        filter.record(guess, feedback).unwrap();

        assert_eq!(texts(&filter.candidates(&dictionary)), ["IRATE"]);
    }

    #[test]
    fn secret_always_survives() {
        let dictionary = dictionary();
        let secret = word("grate");
        let mut filter = CandidateFilter::new(5);

        for guess in ["crane", "irate"] {
            let guess = word(guess);
            let feedback = Feedback::compute(&secret, &guess);
            filter.record(guess, feedback).unwrap();
        }

        let candidates = filter.candidates(&dictionary);
        assert!(candidates.contains(&&secret));
        assert!(candidates.len() < dictionary.len());
    }

    #[test]
    fn duplicate_letter_feedback_filters_correctly() {
        let dictionary = dictionary();
        let mut filter = CandidateFilter::new(5);
        filter.record_text("F.R L.R O.Y O.G D.R").unwrap();

        // ROBOT and ROTOR both give F.R L.R O.Y O.G D.R for FLOOD
        assert_eq!(texts(&filter.candidates(&dictionary)), ["ROBOT", "ROTOR"]);
    }

    #[test]
    fn narrow_matches_full_recompute() {
        let dictionary = dictionary();
        let secret = word("trace");
        let mut filter = CandidateFilter::new(5);

        let mut cached = filter.candidates(&dictionary);
        for guess in ["slate", "crane"] {
            let guess = word(guess);
            let feedback = Feedback::compute(&secret, &guess);
            filter.record(guess, feedback).unwrap();

            cached = filter.narrow(&cached);
            assert_eq!(cached, filter.candidates(&dictionary));
        }
        assert!(cached.contains(&&secret));
    }

    #[test]
    fn record_rejects_mismatches_atomically() {
        let mut filter = CandidateFilter::new(5);
        let guess = word("crane");
        let other = word("slate");
        let feedback = Feedback::compute(&guess, &other);

        assert!(matches!(
            filter.record(guess, feedback),
            Err(FeedbackFormatError::LetterMismatch { position: 0, .. })
        ));

        let short = word("cat");
        let short_feedback = Feedback::compute(&short, &short);
        assert!(matches!(
            filter.record(short.clone(), short_feedback.clone()),
            Err(FeedbackFormatError::Length { .. })
        ));
        assert!(matches!(
            filter.record(word("crane"), short_feedback),
            Err(FeedbackFormatError::TokenCount { .. })
        ));

        assert!(filter.is_empty());
    }

    #[test]
    fn record_text_rejects_malformed_atomically() {
        let mut filter = CandidateFilter::new(5);
        assert!(filter.record_text("F.R L.R O.Y O.G").is_err());
        assert!(filter.record_text("F.R L.R O.Y O.G D.Q").is_err());
        assert!(filter.record_text("F.R L.R O.Y O.G D:R").is_err());
        assert!(filter.is_empty());

        let feedback = filter.record_text("f.r l.r o.y o.g d.r").unwrap();
        assert_eq!(feedback.guess().text(), "FLOOD");
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn check_candidates_reports_contradiction() {
        let dictionary = dictionary();
        let mut filter = CandidateFilter::new(5);
        filter.record_text("Z.G Z.G Z.G Z.G Z.G").unwrap();

        assert_eq!(
            filter.check_candidates(&dictionary),
            Err(EmptyCandidateSet { guesses: 1 })
        );
    }

    #[test]
    fn undo_and_reset() {
        let dictionary = dictionary();
        let mut filter = CandidateFilter::new(5);
        filter.record_text("Z.G Z.G Z.G Z.G Z.G").unwrap();
        assert!(filter.candidates(&dictionary).is_empty());

        let (guess, _) = filter.undo().unwrap();
        assert_eq!(guess.text(), "ZZZZZ");
        assert_eq!(filter.candidates(&dictionary).len(), dictionary.len());

        filter.record_text("F.R L.R O.Y O.G D.R").unwrap();
        filter.reset();
        assert!(filter.is_empty());
        assert_eq!(filter.undo(), None);
    }

    #[test]
    fn other_length_words_never_consistent() {
        let filter = CandidateFilter::new(5);
        assert!(!filter.is_consistent(&word("cat")));
        assert!(filter.is_consistent(&word("crane")));
    }
}
