// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for source management and lexical analysis.
//!
//! Errors carry source locations for precise diagnostics and integrate
//! with [`miette`] for rendering.
//!
//! Two families:
//!
//! - [`RangeError`] — an offset, position, or span endpoint outside the
//!   bounds of a source file. These indicate a caller bug (the scanner
//!   violating its invariants) and are returned from every
//!   offset-accepting operation.
//! - [`LexError`] — a lexical problem in the input itself (unexpected
//!   character, unterminated string). These are routed through the
//!   lexer's error reporter; policy is a caller choice.

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use super::span::{FileSpan, Span};

/// An offset or span outside the bounds of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum RangeError {
    /// An offset past the end of the source, or not on a character boundary.
    #[error("offset {offset} is out of range for a source of length {len}")]
    OutOfRange {
        /// The offending offset.
        offset: usize,
        /// The length of the source file.
        len: usize,
    },

    /// A span whose end precedes its start.
    #[error("span end {end} precedes span start {start}")]
    Inverted {
        /// The requested span start.
        start: usize,
        /// The requested span end.
        end: usize,
    },
}

/// A lexical error encountered during tokenization.
///
/// Carries the source text under the error span and its position. The
/// `Display` form is the user-visible message:
///
/// ```
/// use rill_core::source_analysis::tokenize;
///
/// let error = tokenize("'unterm").unwrap_err();
/// assert_eq!(error.to_string(), "unterminated string \"'\" at 0:0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind} \"{text}\" at {line}:{column}")]
pub struct LexError {
    /// The kind of lexical error.
    #[source]
    pub kind: LexErrorKind,
    /// The source text under the error span.
    pub text: EcoString,
    /// Line of the error (the first line is 0).
    pub line: usize,
    /// Column of the error in code units from the line start.
    pub column: usize,
    /// The error span, for diagnostic rendering.
    #[label("here")]
    pub at: miette::SourceSpan,
}

impl LexError {
    /// Creates a lexical error from the span it covers.
    #[must_use]
    pub fn new(kind: LexErrorKind, span: &FileSpan) -> Self {
        Self {
            kind,
            text: span.text().into(),
            line: span.line(),
            column: span.column(),
            at: span.into(),
        }
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character with no tokenization rule.
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// A string literal with no closing quote before end of input.
    #[error("unterminated string")]
    UnterminatedString,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::SourceFile;

    #[test]
    fn range_error_display() {
        let error = RangeError::OutOfRange { offset: 9, len: 4 };
        assert_eq!(
            error.to_string(),
            "offset 9 is out of range for a source of length 4"
        );

        let error = RangeError::Inverted { start: 3, end: 1 };
        assert_eq!(error.to_string(), "span end 1 precedes span start 3");
    }

    #[test]
    fn lex_error_display() {
        let file = SourceFile::new("let\n#");
        let span = file.span(4, 5).unwrap();
        let error = LexError::new(LexErrorKind::UnexpectedCharacter, &span);
        assert_eq!(error.to_string(), "unexpected character \"#\" at 1:0");
    }

    #[test]
    fn lex_error_span() {
        let file = SourceFile::new("abc");
        let span = file.span(1, 2).unwrap();
        let error = LexError::new(LexErrorKind::UnexpectedCharacter, &span);
        assert_eq!(error.at.offset(), 1);
        assert_eq!(error.at.len(), 1);
        assert_eq!(error.line, 0);
        assert_eq!(error.column, 1);
    }
}
