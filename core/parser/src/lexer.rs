//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans an expression string and produces a stream of Tokens.
//! CONTEXT: Runs after the validator has stripped whitespace. Numbers are
//! maximal runs of digits with at most one decimal point; every operator and
//! parenthesis is a single character.
//!
//! SUPPORTED SYMBOLS:
//! - Operators: + - * /
//! - Grouping: ( )
//! - Numbers: 12, 3.5, .5, 5.

use crate::parser::{ParseError, ParseResult};
use crate::token::Token;
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        match self.input.next() {
            Some('+') => Token::Plus,
            Some('-') => Token::Minus,
            Some('*') => Token::Asterisk,
            Some('/') => Token::Slash,
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,

            // Handle Numbers (starts with digit or dot)
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.read_number(ch),

            // End of input
            None => Token::EOF,

            // Unknown character
            Some(ch) => Token::Illegal(ch),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    fn read_number(&mut self, first_char: char) -> Token {
        let mut number_str = String::from(first_char);
        let mut has_dot = first_char == '.';

        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.input.next();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                number_str.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        // A lone "." has no digits to stand for
        if number_str == "." {
            Token::Illegal('.')
        } else {
            Token::Number(number_str)
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::EOF => None,
            token => Some(token),
        }
    }
}

/// Scans the whole input, failing on the first character that is not part of
/// the grammar.
pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    for token in Lexer::new(input) {
        if let Token::Illegal(ch) = token {
            return Err(ParseError::InvalidToken(ch));
        }
        tokens.push(token);
    }
    Ok(tokens)
}
