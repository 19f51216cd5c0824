//! # Shared Command Parsing Utilities
//!
//! Small validation helpers used by every command parser, so each parser
//! states its requirements declaratively instead of repeating the
//! absent/empty/preamble case analysis.

use crate::commands::errors::ParseError;
use crate::tokenizer::{Prefix, TokenizedArguments};

/// Rejects input whose preamble is non-empty.
///
/// Commands in this crate accept no positional arguments; any text before
/// the first recognized prefix is an error.
pub fn require_empty_preamble(
    tokens: &TokenizedArguments,
    usage: &'static str,
) -> Result<(), ParseError> {
    if tokens.preamble().is_empty() {
        Ok(())
    } else {
        Err(ParseError::UnexpectedPreamble {
            preamble: tokens.preamble().to_string(),
            usage,
        })
    }
}

/// Extracts the value of a required prefix.
///
/// An absent prefix and a present-but-empty value are distinct failures,
/// reported as [`ParseError::MissingPrefix`] and [`ParseError::EmptyValue`].
pub fn require_value(
    tokens: &TokenizedArguments,
    prefix: Prefix,
    usage: &'static str,
) -> Result<String, ParseError> {
    match tokens.value(prefix) {
        None => Err(ParseError::MissingPrefix { prefix, usage }),
        Some("") => Err(ParseError::EmptyValue { prefix, usage }),
        Some(value) => Ok(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    const NAME: Prefix = Prefix::new("n/");
    const CLASS: Prefix = Prefix::new("c/");
    const USAGE: &str = "Usage: join n/PERSON_NAME c/CLASS_NAME";

    #[test]
    fn require_empty_preamble_accepts_clean_input() {
        let tokens = tokenize("n/Alice c/CS2103T", &[NAME, CLASS]);
        assert!(require_empty_preamble(&tokens, USAGE).is_ok());
    }

    #[test]
    fn require_empty_preamble_rejects_leading_text() {
        let tokens = tokenize("oops n/Alice", &[NAME, CLASS]);
        let err = require_empty_preamble(&tokens, USAGE).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedPreamble {
                preamble: "oops".to_string(),
                usage: USAGE,
            }
        );
    }

    #[test]
    fn require_value_distinguishes_absent_from_empty() {
        let tokens = tokenize("n/ ", &[NAME, CLASS]);
        assert_eq!(
            require_value(&tokens, NAME, USAGE),
            Err(ParseError::EmptyValue {
                prefix: NAME,
                usage: USAGE,
            })
        );
        assert_eq!(
            require_value(&tokens, CLASS, USAGE),
            Err(ParseError::MissingPrefix {
                prefix: CLASS,
                usage: USAGE,
            })
        );
    }

    #[test]
    fn require_value_returns_the_trimmed_value() {
        let tokens = tokenize("n/  Alice Tan  ", &[NAME, CLASS]);
        assert_eq!(
            require_value(&tokens, NAME, USAGE).unwrap(),
            "Alice Tan".to_string()
        );
    }
}
