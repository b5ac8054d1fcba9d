//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the calculator expression parser.
//! CONTEXT: This module exposes the validator, lexer and shunting-yard
//! converter needed to turn an expression string into postfix order.
//!
//! PIPELINE: Expression String --> Validator --> Lexer --> Tokens --> Parser --> Postfix --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /
//! - Parentheses for grouping
//! - Multi-digit and decimal numbers: 42, 3.5, .5
//! - Prefix signs: -5, 2*-3, -(1+2)

pub mod lexer;
pub mod parser;
pub mod rpn;
pub mod token;
pub mod validator;


// Re-export commonly used types for convenience
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, to_postfix, ParseError, ParseResult, Parser};
pub use rpn::{BinaryOperator, Postfix, RpnItem, UnaryOperator};
pub use token::Token;
pub use validator::validate;
