//! FILENAME: core/engine/src/error.rs
//! PURPOSE: Error taxonomy for expression evaluation.
//! CONTEXT: Every failure is a property of the input, so none of these are
//! retryable. Callers at the HTTP boundary use `kind()` to pick a status code.

use parser::ParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("division by zero")]
    DivisionByZero,

    /// Operator/operand count mismatch: empty input, dangling operator, adjacent numbers.
    #[error("malformed expression")]
    MalformedExpression,

    #[error("numeric overflow")]
    NumericOverflow,
}

/// Flat classification of every failure the pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidExpression,
    InvalidToken,
    MismatchedParentheses,
    DivisionByZero,
    MalformedExpression,
    NumericOverflow,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Parse(ParseError::InvalidExpression) => ErrorKind::InvalidExpression,
            EvalError::Parse(ParseError::InvalidToken(_)) => ErrorKind::InvalidToken,
            EvalError::Parse(ParseError::MismatchedParentheses) => ErrorKind::MismatchedParentheses,
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
            EvalError::MalformedExpression => ErrorKind::MalformedExpression,
            EvalError::NumericOverflow => ErrorKind::NumericOverflow,
        }
    }

    /// True when the input contains characters outside the grammar.
    /// Structural failures (parentheses, operand counts, arithmetic) are not client errors.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidExpression | ErrorKind::InvalidToken
        )
    }
}

pub type EvalResult<T> = Result<T, EvalError>;
