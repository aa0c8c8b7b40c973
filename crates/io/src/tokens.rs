//! Whitespace-delimited token stream with line tracking.

use std::iter::Enumerate;
use std::str::{FromStr, Lines, SplitWhitespace};

use crate::error::IoError;

/// Reads whitespace-separated tokens, remembering each token's line.
///
/// Line breaks only separate tokens; a record may span lines or share one.
#[derive(Debug)]
pub struct TokenReader<'a> {
    lines: Enumerate<Lines<'a>>,
    current: SplitWhitespace<'a>,
    line: usize,
    peeked: Option<(usize, &'a str)>,
}

impl<'a> TokenReader<'a> {
    /// Creates a reader over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            current: "".split_whitespace(),
            line: 0,
            peeked: None,
        }
    }

    fn advance(&mut self) -> Option<(usize, &'a str)> {
        loop {
            if let Some(token) = self.current.next() {
                return Some((self.line, token));
            }
            let (i, next_line) = self.lines.next()?;
            self.line = i + 1;
            self.current = next_line.split_whitespace();
        }
    }

    fn peek(&mut self) -> Option<(usize, &'a str)> {
        if self.peeked.is_none() {
            self.peeked = self.advance();
        }
        self.peeked
    }

    /// Returns the next raw token with its 1-based line number.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnexpectedEof`] if the input is exhausted.
    pub fn next_token(&mut self, expected: &'static str) -> Result<(usize, &'a str), IoError> {
        self.peeked
            .take()
            .or_else(|| self.advance())
            .ok_or(IoError::UnexpectedEof { expected })
    }

    /// Parses the next token as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnexpectedEof`] if the input is exhausted or
    /// [`IoError::Parse`] if the token is not a valid `T`.
    pub fn next_parsed<T: FromStr>(&mut self, expected: &'static str) -> Result<T, IoError> {
        let (line, token) = self.next_token(expected)?;
        token.parse().map_err(|_| IoError::Parse {
            line,
            token: token.to_string(),
            expected,
        })
    }

    /// Line of the next token, or `None` at end of input.
    pub fn peek_line(&mut self) -> Option<usize> {
        self.peek().map(|(line, _)| line)
    }

    /// Returns `true` if no tokens remain.
    pub fn is_exhausted(&mut self) -> bool {
        self.peek().is_none()
    }
}
