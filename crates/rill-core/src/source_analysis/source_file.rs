// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source file management.
//!
//! A [`SourceFile`] owns immutable source text and maps byte offsets to
//! `(line, column)` positions through a lazily built line-start table.
//! The table is computed on first query and never invalidated; queries
//! after that are a binary search.
//!
//! Line numbering is zero-based: offsets before the first line terminator
//! are on line 0, and the column of an offset on line 0 equals the offset
//! itself.

use std::sync::{Arc, OnceLock};

use ecow::EcoString;

use super::error::RangeError;
use super::span::FileSpan;

/// Immutable source text plus its lazily built line-start table.
///
/// The line-start table stores the offset of the first character *after*
/// each line terminator. The start of the first line (offset 0) is
/// implicit and never stored; a trailing newline leaves a final entry
/// equal to [`len`](SourceFile::len).
///
/// Cloning is cheap: the contents are reference-counted and clones share
/// the memoized line table, so spans carry their file by value without
/// ever copying the text.
///
/// # Examples
///
/// ```
/// use rill_core::source_analysis::SourceFile;
///
/// let file = SourceFile::new("let x = 1\nx + 2");
/// assert_eq!(file.compute_line(12).unwrap(), 1);
/// assert_eq!(file.compute_column(12).unwrap(), 2);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    contents: EcoString,
    origin: Option<EcoString>,
    line_starts: Arc<OnceLock<Vec<usize>>>,
}

impl SourceFile {
    /// Creates a source file with no origin.
    #[must_use]
    pub fn new(contents: impl Into<EcoString>) -> Self {
        Self {
            contents: contents.into(),
            origin: None,
            line_starts: Arc::new(OnceLock::new()),
        }
    }

    /// Creates a source file with an origin URL for diagnostics.
    #[must_use]
    pub fn with_origin(contents: impl Into<EcoString>, origin: impl Into<EcoString>) -> Self {
        Self {
            contents: contents.into(),
            origin: Some(origin.into()),
            line_starts: Arc::new(OnceLock::new()),
        }
    }

    /// The source text.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The origin URL, if one was supplied.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Length of the source text in code units (bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Returns `true` if the source text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Creates a span over `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OutOfRange`] if either endpoint exceeds
    /// [`len`](SourceFile::len) or does not fall on a character boundary,
    /// and [`RangeError::Inverted`] if `end < start`.
    pub fn span(&self, start: usize, end: usize) -> Result<FileSpan, RangeError> {
        if end < start {
            return Err(RangeError::Inverted { start, end });
        }
        self.check_offset(start)?;
        self.check_offset(end)?;
        let text = EcoString::from(&self.contents[start..end]);
        Ok(FileSpan::new(self.clone(), start, text))
    }

    /// Computes the line containing `offset`.
    ///
    /// Returns 0 for offsets before the first stored line start;
    /// otherwise the number of line starts at or before `offset`. An
    /// offset at or past the last line start maps to the final line.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OutOfRange`] if `offset` exceeds
    /// [`len`](SourceFile::len).
    pub fn compute_line(&self, offset: usize) -> Result<usize, RangeError> {
        self.check_offset(offset)?;
        Ok(self.line_of(offset))
    }

    /// Computes the column of `offset`: the number of code units between
    /// it and the start of its line. On line 0 the column equals the
    /// offset.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OutOfRange`] if `offset` exceeds
    /// [`len`](SourceFile::len).
    pub fn compute_column(&self, offset: usize) -> Result<usize, RangeError> {
        self.check_offset(offset)?;
        Ok(self.column_of(offset))
    }

    /// Number of stored line starts (one per line terminator in the text).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts().len()
    }

    /// The offset of the first character after the `index`-th line
    /// terminator, or `None` past the end of the table.
    #[must_use]
    pub fn line_start(&self, index: usize) -> Option<usize> {
        self.line_starts().get(index).copied()
    }

    /// Line lookup without bounds checking; callers validate `offset`.
    pub(crate) fn line_of(&self, offset: usize) -> usize {
        self.line_starts().partition_point(|&start| start <= offset)
    }

    /// Column lookup without bounds checking; callers validate `offset`.
    pub(crate) fn column_of(&self, offset: usize) -> usize {
        match self.line_of(offset) {
            0 => offset,
            line => offset - self.line_starts()[line - 1],
        }
    }

    fn check_offset(&self, offset: usize) -> Result<(), RangeError> {
        if offset > self.contents.len() || !self.contents.is_char_boundary(offset) {
            return Err(RangeError::OutOfRange {
                offset,
                len: self.contents.len(),
            });
        }
        Ok(())
    }

    fn line_starts(&self) -> &[usize] {
        self.line_starts
            .get_or_init(|| build_line_starts(&self.contents))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("origin", &self.origin)
            .field("len", &self.len())
            .finish()
    }
}

/// Builds the line-start table in a single left-to-right pass.
///
/// LF terminates a line; a bare CR (not followed by LF) also terminates a
/// line; CR+LF counts as one terminator, at the LF. Each terminator
/// pushes the offset just past it.
fn build_line_starts(contents: &str) -> Vec<usize> {
    let bytes = contents.as_bytes();
    let mut starts = Vec::new();
    for (position, &byte) in bytes.iter().enumerate() {
        match byte {
            b'\n' => starts.push(position + 1),
            b'\r' if bytes.get(position + 1) != Some(&b'\n') => starts.push(position + 1),
            _ => {}
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::Span as _;

    #[test]
    fn line_starts_lf() {
        let file = SourceFile::new("ab\ncd\n");
        assert_eq!(file.line_count(), 2);
        assert_eq!(file.line_start(0), Some(3));
        assert_eq!(file.line_start(1), Some(6));
        assert_eq!(file.line_start(2), None);
    }

    #[test]
    fn line_starts_bare_cr() {
        let file = SourceFile::new("ab\rcd");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.line_start(0), Some(3));
    }

    #[test]
    fn line_starts_crlf_is_one_terminator() {
        let file = SourceFile::new("ab\r\ncd");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.line_start(0), Some(4));
    }

    #[test]
    fn line_starts_mixed_terminators() {
        let file = SourceFile::new("a\nb\rc\r\nd");
        assert_eq!(file.line_count(), 3);
        assert_eq!(file.line_start(0), Some(2));
        assert_eq!(file.line_start(1), Some(4));
        assert_eq!(file.line_start(2), Some(7));
    }

    #[test]
    fn compute_line_boundaries() {
        let file = SourceFile::new("ab\ncd\n");
        assert_eq!(file.compute_line(0).unwrap(), 0);
        assert_eq!(file.compute_line(2).unwrap(), 0);
        assert_eq!(file.compute_line(3).unwrap(), 1);
        assert_eq!(file.compute_line(5).unwrap(), 1);
        // At the last stored line start: the total number of entries.
        assert_eq!(file.compute_line(6).unwrap(), 2);
    }

    #[test]
    fn compute_column() {
        let file = SourceFile::new("ab\ncd");
        // First line: column equals the offset.
        assert_eq!(file.compute_column(0).unwrap(), 0);
        assert_eq!(file.compute_column(2).unwrap(), 2);
        assert_eq!(file.compute_column(3).unwrap(), 0);
        assert_eq!(file.compute_column(5).unwrap(), 2);
    }

    #[test]
    fn line_column_agree_with_line_starts() {
        let file = SourceFile::new("one\ntwo\r\nthree\rfour");
        for offset in 0..=file.len() {
            let line = file.compute_line(offset).unwrap();
            let column = file.compute_column(offset).unwrap();
            let expected = if line == 0 {
                offset
            } else {
                offset - file.line_start(line - 1).unwrap()
            };
            assert_eq!(column, expected, "offset {offset}");
        }
    }

    #[test]
    fn offsets_out_of_range() {
        let file = SourceFile::new("ab");
        assert_eq!(
            file.compute_line(3),
            Err(RangeError::OutOfRange { offset: 3, len: 2 })
        );
        assert_eq!(
            file.compute_column(3),
            Err(RangeError::OutOfRange { offset: 3, len: 2 })
        );
    }

    #[test]
    fn span_factory() {
        let file = SourceFile::new("let x = 1");
        let span = file.span(4, 5).unwrap();
        assert_eq!(span.text(), "x");
        assert_eq!(span.offset(), 4);

        assert_eq!(
            file.span(4, 2),
            Err(RangeError::Inverted { start: 4, end: 2 })
        );
        assert_eq!(
            file.span(0, 10),
            Err(RangeError::OutOfRange { offset: 10, len: 9 })
        );
    }

    #[test]
    fn span_rejects_non_boundary_offsets() {
        let file = SourceFile::new("é");
        assert_eq!(
            file.span(0, 1),
            Err(RangeError::OutOfRange { offset: 1, len: 2 })
        );
    }

    #[test]
    fn clones_share_the_line_table() {
        let file = SourceFile::new("a\nb");
        let clone = file.clone();
        // Force the table through the clone, then read through the
        // original.
        assert_eq!(clone.compute_line(2).unwrap(), 1);
        assert_eq!(file.line_count(), 1);
    }

    #[test]
    fn empty_file() {
        let file = SourceFile::new("");
        assert!(file.is_empty());
        assert_eq!(file.line_count(), 0);
        assert_eq!(file.compute_line(0).unwrap(), 0);
        assert_eq!(file.compute_column(0).unwrap(), 0);
    }

    #[test]
    fn origin_is_preserved() {
        let file = SourceFile::with_origin("x", "file:///demo.rill");
        assert_eq!(file.origin(), Some("file:///demo.rill"));
        assert_eq!(SourceFile::new("x").origin(), None);
    }
}
