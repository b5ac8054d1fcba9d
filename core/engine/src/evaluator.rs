//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates postfix expressions to a single numeric value.
//! CONTEXT: After an expression is converted to postfix order by the parser,
//! this module walks the sequence with a value stack and computes the result.
//! Each call builds its own stack, so one Evaluator can serve any number of
//! threads at once.
//!
//! SUPPORTED FEATURES:
//! - Binary operations: +, -, *, / (division by an exact zero fails)
//! - Prefix signs: +, -
//! - Float mode (decimals) and integer mode (truncating division)
//! - Overflow detection in both modes

use crate::error::{EvalError, EvalResult};
use crate::value::{Number, NumericMode};
use parser::{BinaryOperator, Postfix, RpnItem, Token, UnaryOperator};

/// The expression evaluator.
/// Holds only the numeric mode it was built with.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    mode: NumericMode,
}

impl Evaluator {
    /// Creates a new Evaluator for the given numeric mode.
    pub fn new(mode: NumericMode) -> Self {
        Evaluator { mode }
    }

    pub fn mode(&self) -> NumericMode {
        self.mode
    }

    /// Runs the full pipeline on a raw expression:
    /// validate, tokenize, check literals against the mode, convert to postfix, evaluate.
    ///
    /// Literals are checked before conversion so a decimal point in integer mode
    /// is reported as `InvalidToken('.')` wherever it appears, ahead of any
    /// parenthesis or evaluation error.
    pub fn evaluate(&self, expression: &str) -> EvalResult<Number> {
        let cleaned = parser::validate(expression)?;
        let tokens = parser::tokenize(&cleaned)?;
        self.check_literals(&tokens)?;
        let postfix = parser::to_postfix(&tokens)?;
        log::debug!(target: "ENGINE", "postfix [{}] mode={}", postfix, self.mode);
        self.evaluate_postfix(&postfix)
    }

    /// Same as `evaluate`, rendered for the wire.
    pub fn calculate(&self, expression: &str) -> EvalResult<String> {
        self.evaluate(expression).map(|n| n.as_text())
    }

    fn check_literals(&self, tokens: &[Token]) -> EvalResult<()> {
        for token in tokens {
            if let Token::Number(text) = token {
                self.mode.check_literal(text)?;
            }
        }
        Ok(())
    }

    /// Evaluates a postfix sequence.
    /// Exactly one value must be left on the stack at the end.
    pub fn evaluate_postfix(&self, postfix: &Postfix) -> EvalResult<Number> {
        let mut stack: Vec<Number> = Vec::with_capacity(postfix.len());
        let mut items = postfix.iter().peekable();

        while let Some(item) = items.next() {
            match item {
                RpnItem::Number(text) => {
                    // A negated integer literal is read with its sign so i64::MIN fits
                    let negated = self.mode == NumericMode::Integer
                        && matches!(items.peek(), Some(RpnItem::Unary(UnaryOperator::Negate)));
                    let value = if negated {
                        items.next();
                        Number::parse_literal(&format!("-{}", text), self.mode)?
                    } else {
                        Number::parse_literal(text, self.mode)?
                    };
                    stack.push(value);
                }
                RpnItem::Binary(op) => {
                    // Pop order is b then a, for `a op b` as written
                    let b = stack.pop().ok_or(EvalError::MalformedExpression)?;
                    let a = stack.pop().ok_or(EvalError::MalformedExpression)?;
                    stack.push(self.eval_binary_op(*op, a, b)?);
                }
                RpnItem::Unary(op) => {
                    let operand = stack.pop().ok_or(EvalError::MalformedExpression)?;
                    stack.push(self.eval_unary_op(*op, operand)?);
                }
            }
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(result), true) => Ok(result),
            _ => Err(EvalError::MalformedExpression),
        }
    }

    // ========================================
    // BINARY OPERATIONS
    // ========================================

    fn eval_binary_op(&self, op: BinaryOperator, a: Number, b: Number) -> EvalResult<Number> {
        match op {
            BinaryOperator::Add => self.eval_add(a, b),
            BinaryOperator::Subtract => self.eval_subtract(a, b),
            BinaryOperator::Multiply => self.eval_multiply(a, b),
            BinaryOperator::Divide => self.eval_divide(a, b),
        }
    }

    fn eval_add(&self, a: Number, b: Number) -> EvalResult<Number> {
        match (a, b) {
            (Number::Integer(l), Number::Integer(r)) => checked(l.checked_add(r)),
            _ => Number::float(a.as_f64() + b.as_f64()),
        }
    }

    fn eval_subtract(&self, a: Number, b: Number) -> EvalResult<Number> {
        match (a, b) {
            (Number::Integer(l), Number::Integer(r)) => checked(l.checked_sub(r)),
            _ => Number::float(a.as_f64() - b.as_f64()),
        }
    }

    fn eval_multiply(&self, a: Number, b: Number) -> EvalResult<Number> {
        match (a, b) {
            (Number::Integer(l), Number::Integer(r)) => checked(l.checked_mul(r)),
            _ => Number::float(a.as_f64() * b.as_f64()),
        }
    }

    fn eval_divide(&self, a: Number, b: Number) -> EvalResult<Number> {
        if b.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        match (a, b) {
            // Truncates toward zero; i64::MIN / -1 is the only overflow
            (Number::Integer(l), Number::Integer(r)) => checked(l.checked_div(r)),
            _ => Number::float(a.as_f64() / b.as_f64()),
        }
    }

    // ========================================
    // UNARY OPERATIONS
    // ========================================

    fn eval_unary_op(&self, op: UnaryOperator, operand: Number) -> EvalResult<Number> {
        match (op, operand) {
            (UnaryOperator::Plus, n) => Ok(n),
            (UnaryOperator::Negate, Number::Integer(n)) => checked(n.checked_neg()),
            (UnaryOperator::Negate, Number::Float(n)) => Number::float(-n),
        }
    }
}

fn checked(result: Option<i64>) -> EvalResult<Number> {
    result.map(Number::Integer).ok_or(EvalError::NumericOverflow)
}
