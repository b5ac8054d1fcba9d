//! FILENAME: core/parser/src/validator.rs
//! PURPOSE: Syntactic guard that runs before tokenization.
//! CONTEXT: Rejects any input containing ASCII letters and strips whitespace.
//! It does not check the grammar; stray punctuation is left to the lexer and
//! the converter.

use crate::parser::{ParseError, ParseResult};

/// Returns the input with all whitespace removed, or `InvalidExpression` if it
/// contains a letter in either case.
pub fn validate(input: &str) -> ParseResult<String> {
    if input.chars().any(|ch| ch.is_ascii_alphabetic()) {
        return Err(ParseError::InvalidExpression);
    }

    Ok(input.chars().filter(|ch| !ch.is_whitespace()).collect())
}
