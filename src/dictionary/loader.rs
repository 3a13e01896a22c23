//! Word list loading utilities
//!
//! Turns raw word lists (files or embedded constants) into validated words.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words of a given length from a file, one per line
///
/// Blank lines are ignored and invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_engine::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().map(str::trim).collect();

    Ok(parse_words(&lines, word_length))
}

/// Convert a string slice to words of the given length, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_engine::dictionary::loader::words_from_slice;
/// use wordle_engine::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS, 5);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    parse_words(slice, word_length)
}

fn parse_words(lines: &[&str], word_length: usize) -> Vec<Word> {
    lines
        .iter()
        .filter(|line| !line.is_empty())
        .filter_map(|&line| match Word::with_length(line, word_length) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!(entry = line, error = %e, "skipping dictionary entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "sl4te", "", "slate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_other_length() {
        let input = &["cat", "crane", "dog"];
        let words = words_from_slice(input, 3);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt", 5).is_err());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("wordle_engine_loader_{}.txt", std::process::id()));
        fs::write(&path, "crane\n  slate  \n\nbad!!\ncat\n").unwrap();

        let words = load_from_file(&path, 5).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "SLATE");
    }
}
