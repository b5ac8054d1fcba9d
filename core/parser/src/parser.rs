//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Shunting-yard converter that turns a token stream into postfix order.
//! CONTEXT: This is the last stage of the parsing pipeline. It takes tokens
//! from the Lexer and produces a Postfix sequence that the engine evaluates
//! with a value stack.
//!
//! RULES:
//!   number   --> append to output
//!   "("      --> push onto the operator stack
//!   ")"      --> pop into output until "(" (discarded); none found is an error
//!   binary   --> pop while top is not "(" and precedence(top) >= precedence(op), then push
//!   prefix   --> push without popping ("+" or "-" where an operand is expected)
//!   end      --> pop everything into output; a leftover "(" is an error
//!
//! PRECEDENCE: "(" = 0, "+ -" = 1, "* /" = 2, prefix sign = 3

use crate::lexer::tokenize;
use crate::rpn::{BinaryOperator, Postfix, RpnItem, UNARY_PRECEDENCE, UnaryOperator};
use crate::token::Token;
use crate::validator::validate;

/// Errors raised while validating, scanning or converting an expression.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// The input contains letters.
    InvalidExpression,
    /// A character that is neither a digit, a decimal point, an operator nor a parenthesis.
    InvalidToken(char),
    /// A ")" without a matching "(" or a "(" that is never closed.
    MismatchedParentheses,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidExpression => write!(f, "invalid expression"),
            ParseError::InvalidToken(ch) => write!(f, "invalid token '{}'", ch),
            ParseError::MismatchedParentheses => write!(f, "mismatched parentheses"),
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

/// Entries of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    LParen,
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

impl Pending {
    fn precedence(self) -> u8 {
        match self {
            Pending::LParen => 0,
            Pending::Binary(op) => op.precedence(),
            Pending::Unary(_) => UNARY_PRECEDENCE,
        }
    }

    /// Converts a popped operator into its output form.
    /// "(" never reaches the output.
    fn into_item(self) -> Option<RpnItem> {
        match self {
            Pending::LParen => None,
            Pending::Binary(op) => Some(RpnItem::Binary(op)),
            Pending::Unary(op) => Some(RpnItem::Unary(op)),
        }
    }
}

/// The Parser holds the operator stack and the output sequence for one conversion.
pub struct Parser {
    operators: Vec<Pending>,
    output: Postfix,
    /// True at the start, after "(" and after any operator: the next "+"/"-" is a sign.
    expect_operand: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            operators: Vec::new(),
            output: Postfix::new(),
            expect_operand: true,
        }
    }

    /// Consumes the token stream and returns it in postfix order.
    pub fn convert(mut self, tokens: &[Token]) -> ParseResult<Postfix> {
        for token in tokens {
            self.process(token)?;
        }
        self.finish()
    }

    fn process(&mut self, token: &Token) -> ParseResult<()> {
        match token {
            Token::Number(text) => {
                self.output.push(RpnItem::Number(text.clone()));
                self.expect_operand = false;
            }

            Token::LParen => {
                self.operators.push(Pending::LParen);
                self.expect_operand = true;
            }

            Token::RParen => {
                self.close_group()?;
                self.expect_operand = false;
            }

            Token::Plus if self.expect_operand => {
                self.operators.push(Pending::Unary(UnaryOperator::Plus));
            }

            Token::Minus if self.expect_operand => {
                self.operators.push(Pending::Unary(UnaryOperator::Negate));
            }

            Token::Plus => self.push_binary(BinaryOperator::Add),
            Token::Minus => self.push_binary(BinaryOperator::Subtract),
            Token::Asterisk => self.push_binary(BinaryOperator::Multiply),
            Token::Slash => self.push_binary(BinaryOperator::Divide),

            // EOF is only a lexer sentinel; it carries nothing
            Token::EOF => {}

            Token::Illegal(ch) => return Err(ParseError::InvalidToken(*ch)),
        }

        Ok(())
    }

    /// Pops operators of equal or higher precedence, then pushes `op`.
    /// Popping on equality gives left-to-right grouping: 8-3-2 is (8-3)-2.
    fn push_binary(&mut self, op: BinaryOperator) {
        while let Some(&top) = self.operators.last() {
            if top == Pending::LParen || top.precedence() < op.precedence() {
                break;
            }
            self.operators.pop();
            if let Some(item) = top.into_item() {
                self.output.push(item);
            }
        }

        self.operators.push(Pending::Binary(op));
        self.expect_operand = true;
    }

    /// Handles ")" by draining the stack down to the matching "(".
    fn close_group(&mut self) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::LParen) => return Ok(()),
                Some(pending) => {
                    if let Some(item) = pending.into_item() {
                        self.output.push(item);
                    }
                }
                None => return Err(ParseError::MismatchedParentheses),
            }
        }
    }

    fn finish(mut self) -> ParseResult<Postfix> {
        while let Some(pending) = self.operators.pop() {
            match pending.into_item() {
                Some(item) => self.output.push(item),
                None => return Err(ParseError::MismatchedParentheses),
            }
        }

        Ok(self.output)
    }
}

/// Converts an already tokenized expression into postfix order.
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Postfix> {
    Parser::new().convert(tokens)
}

/// Convenience function: validate, tokenize and convert a raw expression.
pub fn parse(input: &str) -> ParseResult<Postfix> {
    let cleaned = validate(input)?;
    let tokens = tokenize(&cleaned)?;
    to_postfix(&tokens)
}
