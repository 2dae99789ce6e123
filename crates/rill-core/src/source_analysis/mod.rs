// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexing infrastructure for Rill source code.
//!
//! **DDD Context:** Source Analysis
//!
//! This module contains the source manager, the scanner, and the lexer.
//!
//! # Source Management
//!
//! A [`SourceFile`] pairs immutable source text with a lazily built
//! line-start table, mapping byte offsets to `(line, column)` positions.
//! [`Span`]s carve contiguous slices out of a file for diagnostics.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] drives a [`Scanner`] over a source file and produces
//! [`Token`]s with their kind, lexeme, offset, and any line comments that
//! preceded them. The token stream always ends with a synthetic
//! [`TokenKind::Eof`].
//!
//! ```
//! use rill_core::source_analysis::{TokenKind, tokenize};
//!
//! let tokens = tokenize("main -> 'Hello'").unwrap();
//! assert_eq!(tokens.len(), 4); // main, ->, 'Hello', EOF
//! assert_eq!(tokens[3].kind(), TokenKind::Eof);
//! ```
//!
//! # Error Handling
//!
//! Lexical errors flow through an error reporter. The default reporter
//! aborts tokenization with the [`LexError`]; a caller-supplied reporter
//! that returns `Ok(())` lets the lexer emit a best-effort token and
//! continue. Range errors ([`RangeError`]) indicate out-of-bounds offsets
//! and are returned from every offset-accepting operation.

pub mod chars;
mod error;
mod lexer;
mod scanner;
mod source_file;
mod span;
mod token;


pub use error::{LexError, LexErrorKind, RangeError};
pub use lexer::{ErrorReporter, Lexer, tokenize, tokenize_with};
pub use scanner::Scanner;
pub use source_file::SourceFile;
pub use span::{FileSpan, Span, SpanLine, StringSpan};
pub use token::{BindingPower, Comment, Token, TokenKind};
