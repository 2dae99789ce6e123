// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source location tracking.
//!
//! A span is a contiguous slice of a source file: `(file, offset, text)`
//! with derived `(line, column)`. Diagnostics and tokens carry spans so
//! errors can point at the exact source text.
//!
//! Two flavors share the [`Span`] contract:
//!
//! - [`StringSpan`] owns its position outright; everything is precomputed
//!   at construction.
//! - [`FileSpan`] references a [`SourceFile`] and derives line and column
//!   through the file's line-start table on demand.

use ecow::EcoString;

use super::source_file::SourceFile;

/// Common contract for source spans.
pub trait Span {
    /// Offset of the span's first code unit.
    fn offset(&self) -> usize;

    /// Line of the span's first code unit (the first line is 0).
    fn line(&self) -> usize;

    /// Column of the span's first code unit, in code units from the line
    /// start.
    fn column(&self) -> usize;

    /// The literal source text the span covers.
    fn text(&self) -> &str;

    /// Length of the span in code units.
    fn len(&self) -> usize {
        self.text().len()
    }

    /// Returns `true` if the span covers no text.
    fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Offset one past the span's last code unit.
    fn end(&self) -> usize {
        self.offset() + self.len()
    }

    /// Returns `true` if the span's text contains a line terminator.
    fn is_multi_line(&self) -> bool {
        self.text().contains(['\n', '\r'])
    }

    /// Splits the span into per-line records.
    ///
    /// The `i`-th record carries line number `line() + i`. Callers should
    /// check [`is_multi_line`](Span::is_multi_line) first; for a
    /// single-line span this returns one record covering the whole text.
    fn lines(&self) -> Vec<SpanLine> {
        split_line_breaks(self.text())
            .into_iter()
            .enumerate()
            .map(|(i, text)| SpanLine {
                line: self.line() + i,
                text: EcoString::from(text),
            })
            .collect()
    }
}

/// One line of a multi-line span.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpanLine {
    /// The line number this record covers.
    pub line: usize,
    /// The text of the line, without its terminator.
    pub text: EcoString,
}

/// A span that owns its position and text outright.
///
/// Used for synthetic text that has no backing file, and by tools that
/// materialize positions up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringSpan {
    offset: usize,
    line: usize,
    column: usize,
    text: EcoString,
}

impl StringSpan {
    /// Creates a span with every coordinate precomputed.
    #[must_use]
    pub fn new(offset: usize, line: usize, column: usize, text: impl Into<EcoString>) -> Self {
        Self {
            offset,
            line,
            column,
            text: text.into(),
        }
    }
}

impl Span for StringSpan {
    fn offset(&self) -> usize {
        self.offset
    }

    fn line(&self) -> usize {
        self.line
    }

    fn column(&self) -> usize {
        self.column
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// A span backed by a [`SourceFile`].
///
/// Holds a handle to the file and its starting offset; line and column
/// are computed through the file's line-start table when asked for. The
/// text is stored to avoid re-slicing the file.
///
/// Construct through [`SourceFile::span`], which validates the endpoints.
#[derive(Debug, Clone)]
pub struct FileSpan {
    file: SourceFile,
    offset: usize,
    text: EcoString,
}

impl FileSpan {
    /// Offsets are validated by [`SourceFile::span`] before this runs.
    pub(crate) fn new(file: SourceFile, offset: usize, text: EcoString) -> Self {
        Self { file, offset, text }
    }

    /// The file this span points into.
    #[must_use]
    pub fn file(&self) -> &SourceFile {
        &self.file
    }
}

impl Span for FileSpan {
    fn offset(&self) -> usize {
        self.offset
    }

    fn line(&self) -> usize {
        self.file.line_of(self.offset)
    }

    fn column(&self) -> usize {
        self.file.column_of(self.offset)
    }

    fn text(&self) -> &str {
        &self.text
    }
}

impl PartialEq for FileSpan {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
            && self.text == other.text
            && self.file.contents() == other.file.contents()
    }
}

impl Eq for FileSpan {}

impl From<&FileSpan> for miette::SourceSpan {
    fn from(span: &FileSpan) -> Self {
        (span.offset(), span.len()).into()
    }
}

/// Splits on LF, bare CR, or CR+LF, counting CR+LF as one break.
fn split_line_breaks(mut text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    loop {
        match text.find(['\n', '\r']) {
            Some(i) => {
                parts.push(&text[..i]);
                let skip = if text[i..].starts_with("\r\n") { 2 } else { 1 };
                text = &text[i + skip..];
            }
            None => {
                parts.push(text);
                return parts;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_span(contents: &str, start: usize, end: usize) -> FileSpan {
        SourceFile::new(contents).span(start, end).unwrap()
    }

    #[test]
    fn string_span_accessors() {
        let span = StringSpan::new(10, 2, 4, "let");
        assert_eq!(span.offset(), 10);
        assert_eq!(span.line(), 2);
        assert_eq!(span.column(), 4);
        assert_eq!(span.text(), "let");
        assert_eq!(span.len(), 3);
        assert_eq!(span.end(), 13);
        assert!(!span.is_empty());
        assert!(!span.is_multi_line());
    }

    #[test]
    fn file_span_derives_position_lazily() {
        let span = file_span("ab\ncd\nef", 6, 8);
        assert_eq!(span.offset(), 6);
        assert_eq!(span.line(), 2);
        assert_eq!(span.column(), 0);
        assert_eq!(span.text(), "ef");
    }

    #[test]
    fn multi_line_detection() {
        assert!(file_span("a\nb", 0, 3).is_multi_line());
        assert!(StringSpan::new(0, 0, 0, "a\rb").is_multi_line());
        assert!(!file_span("abc", 0, 3).is_multi_line());
    }

    #[test]
    fn lines_enumerates_from_span_line() {
        let span = file_span("ab\ncd\nef", 3, 8);
        assert!(span.is_multi_line());
        assert_eq!(
            span.lines(),
            vec![
                SpanLine {
                    line: 1,
                    text: "cd".into()
                },
                SpanLine {
                    line: 2,
                    text: "ef".into()
                },
            ]
        );
    }

    #[test]
    fn lines_single_line_span() {
        let span = StringSpan::new(0, 5, 0, "hello");
        assert_eq!(
            span.lines(),
            vec![SpanLine {
                line: 5,
                text: "hello".into()
            }]
        );
    }

    #[test]
    fn lines_crlf_counts_once() {
        let span = StringSpan::new(0, 0, 0, "a\r\nb\rc\nd");
        let lines: Vec<_> = span.lines().into_iter().map(|l| l.text).collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn length_matches_text() {
        let span = file_span("a\nb", 0, 3);
        assert_eq!(span.len(), span.text().len());
    }

    #[test]
    fn file_span_equality_is_positional() {
        let file = SourceFile::new("aa aa");
        assert_eq!(file.span(0, 2).unwrap(), file.span(0, 2).unwrap());
        assert_ne!(file.span(0, 2).unwrap(), file.span(3, 5).unwrap());
        // The same position in a file with different contents is a
        // different span.
        let other = SourceFile::new("aa ab");
        assert_ne!(file.span(3, 5).unwrap(), other.span(3, 5).unwrap());
    }

    #[test]
    fn miette_conversion() {
        let span = file_span("hello", 1, 4);
        let converted: miette::SourceSpan = (&span).into();
        assert_eq!(converted.offset(), 1);
        assert_eq!(converted.len(), 3);
    }
}
