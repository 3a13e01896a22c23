//! Line input shared by the text front ends

use anyhow::Result;
use std::io::{BufRead, Write};

/// Prompt and read one trimmed line; `None` at end of input
pub(crate) fn read_line<I: BufRead, O: Write>(
    prompt: &str,
    input: &mut I,
    out: &mut O,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Whether an answer to a yes/no question is a yes
pub(crate) fn is_yes(answer: Option<&str>) -> bool {
    matches!(
        answer.map(str::to_ascii_lowercase).as_deref(),
        Some("yes" | "y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_trimmed_lines_until_eof() {
        let mut input = "  crane \nslate\n".as_bytes();
        let mut out = Vec::new();

        assert_eq!(read_line("Guess", &mut input, &mut out).unwrap().as_deref(), Some("crane"));
        assert_eq!(read_line("Guess", &mut input, &mut out).unwrap().as_deref(), Some("slate"));
        assert_eq!(read_line("Guess", &mut input, &mut out).unwrap(), None);
        assert_eq!(String::from_utf8(out).unwrap(), "Guess: Guess: Guess: ");
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes(Some("Y")));
        assert!(is_yes(Some("yes")));
        assert!(!is_yes(Some("no")));
        assert!(!is_yes(None));
    }
}
