//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the expression engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod error;
pub mod evaluator;
pub mod value;

// Re-export commonly used types at the crate root
pub use error::{ErrorKind, EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use parser::{ParseError, Postfix};
pub use value::{Number, NumericMode};
