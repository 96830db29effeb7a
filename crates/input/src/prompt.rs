//! Parsing of typed answers: atomic numbers and quit words.

use std::fmt;

use crate::types::MAX_ATOMIC_NUMBER;

/// Answer to the "which element" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementChoice {
    Quit,
    Element(u32),
}

/// Why an atomic number was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// Input is not an integer.
    NotANumber(String),
    /// Integer outside `1..=118`.
    OutOfRange(i64),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::NotANumber(raw) => write!(f, "Invalid atomic number: {}", raw),
            PromptError::OutOfRange(_) => write!(
                f,
                "Atomic number must be between 1 and {}.",
                MAX_ATOMIC_NUMBER
            ),
        }
    }
}

impl std::error::Error for PromptError {}

/// Parse an atomic number in `1..=118` (surrounding whitespace allowed).
pub fn parse_atomic_number(raw: &str) -> Result<u32, PromptError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| PromptError::NotANumber(raw.to_string()))?;

    if (1..=MAX_ATOMIC_NUMBER as i64).contains(&value) {
        Ok(value as u32)
    } else {
        Err(PromptError::OutOfRange(value))
    }
}

/// Parse a menu answer: `q`, `quit` or `exit` (any case), or an atomic number.
pub fn parse_element_choice(raw: &str) -> Result<ElementChoice, PromptError> {
    match raw.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(ElementChoice::Quit),
        _ => parse_atomic_number(raw).map(ElementChoice::Element),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_table_range() {
        assert_eq!(parse_atomic_number("1"), Ok(1));
        assert_eq!(parse_atomic_number(" 118\n"), Ok(118));
        assert_eq!(parse_atomic_number("+8"), Ok(8));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_atomic_number("0"), Err(PromptError::OutOfRange(0)));
        assert_eq!(parse_atomic_number("119"), Err(PromptError::OutOfRange(119)));
        assert_eq!(parse_atomic_number("-3"), Err(PromptError::OutOfRange(-3)));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(
            parse_atomic_number("gold"),
            Err(PromptError::NotANumber("gold".to_string()))
        );
        assert!(parse_atomic_number("").is_err());
        assert!(parse_atomic_number("1.5").is_err());
    }

    #[test]
    fn quit_words() {
        for word in ["q", "Q", "quit", "EXIT", " exit "] {
            assert_eq!(parse_element_choice(word), Ok(ElementChoice::Quit));
        }
        assert_eq!(parse_element_choice("79"), Ok(ElementChoice::Element(79)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            PromptError::OutOfRange(500).to_string(),
            "Atomic number must be between 1 and 118."
        );
        assert_eq!(
            PromptError::NotANumber("x".into()).to_string(),
            "Invalid atomic number: x"
        );
    }
}
