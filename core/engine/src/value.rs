//! FILENAME: core/engine/src/value.rs
//! PURPOSE: Numeric modes and the values that flow through the value stack.
//! CONTEXT: The mode is chosen once, when the Evaluator is built. Float mode
//! accepts decimals; integer mode rejects them and truncates on division.

use crate::error::{EvalError, EvalResult};
use parser::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How literals are read and arithmetic is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericMode {
    /// 64-bit binary floating point; decimals allowed.
    #[default]
    Float,
    /// 64-bit signed integers; truncating division, no decimal points.
    Integer,
}

impl FromStr for NumericMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "float" => Ok(NumericMode::Float),
            "integer" | "int" => Ok(NumericMode::Integer),
            other => Err(format!("unknown numeric mode: {}", other)),
        }
    }
}

impl NumericMode {
    /// Checks that a literal's characters are allowed in this mode.
    /// Integer mode has no decimal point.
    pub fn check_literal(&self, text: &str) -> Result<(), ParseError> {
        match self {
            NumericMode::Integer if text.contains('.') => Err(ParseError::InvalidToken('.')),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for NumericMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericMode::Float => write!(f, "float"),
            NumericMode::Integer => write!(f, "integer"),
        }
    }
}

/// A computed value. All values of one evaluation share the evaluator's mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Reads a numeric literal produced by the lexer, optionally with a
    /// leading `-` folded in from a prefix sign.
    pub fn parse_literal(text: &str, mode: NumericMode) -> EvalResult<Number> {
        mode.check_literal(text)?;
        match mode {
            NumericMode::Integer => {
                // Only digits and a sign reach here, so failure means the value is out of range
                text.parse::<i64>()
                    .map(Number::Integer)
                    .map_err(|_| EvalError::NumericOverflow)
            }
            NumericMode::Float => {
                let n = text
                    .parse::<f64>()
                    .map_err(|_| EvalError::MalformedExpression)?;
                Number::float(n)
            }
        }
    }

    /// Wraps a float result, rejecting infinities and NaN and folding -0.0 into 0.0.
    pub fn float(n: f64) -> EvalResult<Number> {
        if !n.is_finite() {
            return Err(EvalError::NumericOverflow);
        }
        Ok(Number::Float(n + 0.0))
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => *n as f64,
            Number::Float(n) => *n,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(n) => *n == 0,
            Number::Float(n) => *n == 0.0,
        }
    }

    /// Wire representation. Whole floats keep a `.0` fraction at any magnitude.
    pub fn as_text(&self) -> String {
        match self {
            Number::Integer(n) => n.to_string(),
            Number::Float(n) if n.fract() == 0.0 => format!("{:.1}", n),
            Number::Float(n) => format!("{}", n),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_literals_accept_decimals() {
        assert_eq!(
            Number::parse_literal("3.25", NumericMode::Float),
            Ok(Number::Float(3.25))
        );
        assert_eq!(
            Number::parse_literal(".5", NumericMode::Float),
            Ok(Number::Float(0.5))
        );
    }

    #[test]
    fn integer_literals_reject_decimals() {
        assert_eq!(
            Number::parse_literal("1.5", NumericMode::Integer),
            Err(EvalError::Parse(ParseError::InvalidToken('.')))
        );
    }

    #[test]
    fn oversized_integer_literal_overflows() {
        assert_eq!(
            Number::parse_literal("99999999999999999999", NumericMode::Integer),
            Err(EvalError::NumericOverflow)
        );
    }

    #[test]
    fn whole_floats_render_with_fraction() {
        assert_eq!(Number::Float(6.0).as_text(), "6.0");
        assert_eq!(Number::Float(-2.0).as_text(), "-2.0");
        assert_eq!(Number::Float(0.25).as_text(), "0.25");
        assert_eq!(Number::Integer(6).as_text(), "6");
    }

    #[test]
    fn large_whole_floats_keep_fraction() {
        assert_eq!(Number::Float(1e15).as_text(), "1000000000000000.0");
        assert_eq!(Number::Float(-1e16).as_text(), "-10000000000000000.0");
        assert_eq!(Number::Float(1e15 + 0.5).as_text(), "1000000000000000.5");
    }

    #[test]
    fn integer_mode_checks_decimal_point_only() {
        assert_eq!(NumericMode::Integer.check_literal("12"), Ok(()));
        assert_eq!(
            NumericMode::Integer.check_literal(".5"),
            Err(ParseError::InvalidToken('.'))
        );
        assert_eq!(NumericMode::Float.check_literal("1.5"), Ok(()));
    }

    #[test]
    fn signed_integer_literal_reaches_minimum() {
        assert_eq!(
            Number::parse_literal("-9223372036854775808", NumericMode::Integer),
            Ok(Number::Integer(i64::MIN))
        );
        assert_eq!(
            Number::parse_literal("9223372036854775808", NumericMode::Integer),
            Err(EvalError::NumericOverflow)
        );
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(Number::float(-0.0).unwrap().as_text(), "0.0");
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert_eq!(Number::float(f64::INFINITY), Err(EvalError::NumericOverflow));
        assert_eq!(Number::float(f64::NAN), Err(EvalError::NumericOverflow));
    }

    #[test]
    fn numeric_mode_parses_from_text() {
        assert_eq!("float".parse::<NumericMode>(), Ok(NumericMode::Float));
        assert_eq!(" Integer ".parse::<NumericMode>(), Ok(NumericMode::Integer));
        assert!("decimal".parse::<NumericMode>().is_err());
    }

    #[test]
    fn numeric_mode_deserializes_lowercase() {
        let mode: NumericMode = serde_json::from_str("\"integer\"").unwrap();
        assert_eq!(mode, NumericMode::Integer);
    }
}
