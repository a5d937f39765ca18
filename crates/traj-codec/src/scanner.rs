// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Grammar scanner: a forward-only cursor over trajectory text.
//!
//! The cursor never mutates the source. Offsets are byte positions into the
//! input text, so errors point at the exact place a token was expected.

use crate::error::DecodeError;

/// Forward-only position within the input text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `src`.
    #[must_use]
    pub const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Returns `true` once all input is consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Next character, if any.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances past a run of whitespace.
    pub fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Returns `true` if `keyword` (ASCII) starts at the cursor, ignoring case.
    #[must_use]
    pub fn starts_with_keyword(&self, keyword: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..keyword.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(keyword.as_bytes()))
    }

    /// Consumes `keyword` (ASCII, case-insensitive) or fails without moving.
    pub fn expect_keyword(&mut self, keyword: &str) -> Result<(), DecodeError> {
        if self.starts_with_keyword(keyword) {
            self.pos += keyword.len();
            Ok(())
        } else {
            Err(self.syntax_error(format!("expected `{keyword}`")))
        }
    }

    /// Consumes `c` if it is the next character.
    pub fn eat_char(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `c` or fails without moving.
    pub fn expect_char(&mut self, c: char) -> Result<(), DecodeError> {
        if self.eat_char(c) {
            Ok(())
        } else {
            Err(self.syntax_error(format!("expected `{c}`")))
        }
    }

    /// Returns the text before the next `delim` and moves past the delimiter.
    ///
    /// Returns `None` without moving when `delim` does not occur.
    pub fn take_until(&mut self, delim: char) -> Option<&'a str> {
        let rest = self.rest();
        let idx = rest.find(delim)?;
        self.pos += idx + delim.len_utf8();
        Some(&rest[..idx])
    }

    /// Like [`Cursor::take_until`], but fails when `stop` occurs before `delim`.
    pub fn take_until_before(&mut self, delim: char, stop: char) -> Option<&'a str> {
        let rest = self.rest();
        let idx = rest.find(delim)?;
        if rest[..idx].contains(stop) {
            return None;
        }
        self.pos += idx + delim.len_utf8();
        Some(&rest[..idx])
    }

    /// Counts occurrences of `delim` in the unconsumed input.
    #[must_use]
    pub fn count_remaining(&self, delim: char) -> usize {
        self.rest().matches(delim).count()
    }

    /// Counts `delim` at nesting depth zero up to the first unmatched `close`.
    ///
    /// Delimiters inside `open`/`close` pairs and after the unmatched `close`
    /// are not counted. Without an unmatched `close` the count runs to the end
    /// of input.
    #[must_use]
    pub fn count_before_close(&self, delim: char, open: char, close: char) -> usize {
        let mut depth = 0usize;
        let mut count = 0;
        for c in self.rest().chars() {
            if c == open {
                depth += 1;
            } else if c == close {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            } else if c == delim && depth == 0 {
                count += 1;
            }
        }
        count
    }

    /// The identifier-like word (ASCII alphanumerics and `_`) at the cursor,
    /// without consuming it. Empty when the next character is not part of a word.
    #[must_use]
    pub fn peek_word(&self) -> &'a str {
        let rest = self.rest();
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        &rest[..len]
    }

    /// Builds a [`DecodeError::Syntax`] at the current offset.
    #[must_use]
    pub fn syntax_error(&self, message: impl Into<String>) -> DecodeError {
        DecodeError::Syntax {
            offset: self.pos,
            message: message.into(),
        }
    }
}
