use std::num::ParseIntError;

use thiserror::Error;

use tally_combinatorics::Count;

/// Errors that can occur during number parsing.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseNumberError {
    #[error("could not read a natural number from '{text}'")]
    InvalidInteger { text: String },
    #[error("parse error: {0}")]
    ParseError(#[from] ParseIntError),
}

/// Parses a natural number from a string, skipping leading and trailing whitespace.
///
/// Digit separators `_` are accepted, as in `1_000_000`.
///
/// # Examples
/// ```
/// use tally_io::parse_count;
///
/// assert_eq!(parse_count("42").unwrap(), 42);
/// assert_eq!(parse_count("  1_000  ").unwrap(), 1000);
/// assert!(parse_count("abc").is_err());
/// ```
pub fn parse_count(text: &str) -> Result<Count, ParseNumberError> {
    let digits: String = text.trim().chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || digits.chars().any(|c| !c.is_ascii_digit()) {
        return Err(ParseNumberError::InvalidInteger { text: text.to_string() });
    }

    // Only overflow is left at this point.
    Ok(digits.parse::<Count>()?)
}

/// Parses a sequence of natural numbers separated by whitespace.
///
/// # Examples
/// ```
/// use tally_io::parse_count_sequence;
///
/// assert_eq!(parse_count_sequence("1 2 3").unwrap(), vec![1, 2, 3]);
/// assert_eq!(parse_count_sequence("  42  123  ").unwrap(), vec![42, 123]);
/// assert!(parse_count_sequence("1 a 3").is_err());
/// ```
pub fn parse_count_sequence(text: &str) -> Result<Vec<Count>, ParseNumberError> {
    text.split_whitespace().map(parse_count).collect()
}
