// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! A forward cursor over a source file.
//!
//! The scanner is the lexer's only view of the source: peek/advance/match
//! primitives over a `(file, position)` pair. Positions are byte offsets;
//! [`advance`](Scanner::advance) steps by whole characters, so arbitrary
//! input can never split a code point.
//!
//! The out-of-range sentinel is [`None`]: peeking past the end yields
//! `None`, and predicates applied through `is_some_and` are false for it.

use super::error::RangeError;
use super::source_file::SourceFile;

/// A forward cursor with peek/advance/match primitives.
///
/// # Examples
///
/// ```
/// use rill_core::source_analysis::{Scanner, SourceFile};
///
/// let mut scanner = Scanner::new(SourceFile::new("a + b"));
/// assert_eq!(scanner.advance(), Some('a'));
/// assert!(scanner.match_char(' '));
/// assert_eq!(scanner.peek(), Some('+'));
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    file: SourceFile,
    position: usize,
}

impl Scanner {
    /// Creates a scanner positioned at the start of the file.
    #[must_use]
    pub fn new(file: SourceFile) -> Self {
        Self { file, position: 0 }
    }

    /// The file being scanned.
    #[must_use]
    pub fn file(&self) -> &SourceFile {
        &self.file
    }

    /// Returns `true` while input remains.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.position < self.file.len()
    }

    /// The character at the cursor, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The character `n` positions past the cursor (`peek_nth(0)` is
    /// [`peek`](Scanner::peek)).
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes and returns the character at the cursor.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `expected` if the remaining input starts with it.
    pub fn match_str(&mut self, expected: &str) -> bool {
        if self.remaining().starts_with(expected) {
            self.position += expected.len();
            true
        } else {
            false
        }
    }

    /// Consumes the next character if `predicate` accepts it. At end of
    /// input the predicate is not consulted and the match fails.
    pub fn match_pred(&mut self, predicate: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if predicate(c) => {
                self.position += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Consumes characters while `predicate` accepts them.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.match_pred(&predicate) {}
    }

    /// The slice of contents over `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or not on character
    /// boundaries; callers pass offsets the scanner has already visited.
    #[must_use]
    pub fn substring(&self, start: usize, end: usize) -> &str {
        &self.file.contents()[start..end]
    }

    /// Everything from the cursor to the end of input.
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.file.contents()[self.position..]
    }

    /// The cursor's byte offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OutOfRange`] if `position` exceeds the file
    /// length or falls inside a character.
    pub fn set_position(&mut self, position: usize) -> Result<(), RangeError> {
        if position > self.file.len() || !self.file.contents().is_char_boundary(position) {
            return Err(RangeError::OutOfRange {
                offset: position,
                len: self.file.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Moves the cursor back to the start of the file.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}
