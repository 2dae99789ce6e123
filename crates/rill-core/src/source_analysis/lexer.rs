// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Rill source code.
//!
//! The lexer drives a [`Scanner`] over a source file and produces a
//! token sequence terminated by a synthetic [`TokenKind::Eof`]. It is
//! hand-written for maximum control over error recovery and comment
//! attachment.
//!
//! # Design Principles
//!
//! - **Maximal munch**: the longest matching operator wins (`===` over
//!   `==` over `=`).
//! - **Comment attachment**: line comments are buffered and attached to
//!   the next significant token; a trailing comment with no following
//!   token is discarded.
//! - **Newline-blind**: the lexer attaches no significance to line
//!   terminators. Whether a newline ends a statement is decided by the
//!   parser against the file's line table.
//!
//! # Error Recovery
//!
//! Lexical errors are routed through an error reporter. The default
//! reporter aborts tokenization; a reporter that returns `Ok(())` lets
//! the lexer continue, emitting a best-effort token where it can (an
//! unterminated string still yields its truncated [`TokenKind::String`]
//! token).
//!
//! # Example
//!
//! ```
//! use rill_core::source_analysis::{TokenKind, tokenize};
//!
//! let tokens = tokenize("1 + 2 * 3").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Number,
//!         TokenKind::Plus,
//!         TokenKind::Number,
//!         TokenKind::Star,
//!         TokenKind::Number,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

use ecow::EcoString;

use super::chars;
use super::error::{LexError, LexErrorKind};
use super::scanner::Scanner;
use super::source_file::SourceFile;
use super::span::FileSpan;
use super::token::{Comment, Token, TokenKind};

/// Receives lexical errors as they are detected.
///
/// Returning `Ok(())` lets the lexer continue; returning `Err` aborts
/// tokenization with that error. The default reporter is `|error|
/// Err(error)`.
pub type ErrorReporter<'a> = Box<dyn FnMut(LexError) -> Result<(), LexError> + 'a>;

/// Tokenizes a program with the default (aborting) error reporter.
///
/// The returned sequence always ends with an [`TokenKind::Eof`] token.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered.
pub fn tokenize(program: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(SourceFile::new(program)).tokenize()
}

/// Tokenizes a program, routing lexical errors through `on_error`.
///
/// # Errors
///
/// Returns a [`LexError`] only if `on_error` returns one; a reporter
/// that always returns `Ok(())` makes this infallible.
///
/// # Examples
///
/// ```
/// use rill_core::source_analysis::{TokenKind, tokenize_with};
///
/// let mut errors = Vec::new();
/// let tokens = tokenize_with(
///     "'unterm",
///     Box::new(|error| {
///         errors.push(error);
///         Ok(())
///     }),
/// )
/// .unwrap();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(tokens[0].kind(), TokenKind::String);
/// assert_eq!(tokens[0].lexeme(), "unterm");
/// ```
pub fn tokenize_with(
    program: &str,
    on_error: ErrorReporter<'_>,
) -> Result<Vec<Token>, LexError> {
    Lexer::with_reporter(SourceFile::new(program), on_error).tokenize()
}

/// A lexer that tokenizes Rill source code.
pub struct Lexer<'r> {
    /// The forward cursor over the source.
    program: Scanner,
    /// Start of the token currently being built; distinct from the
    /// scanner's cursor.
    anchor: usize,
    /// Line comments awaiting attachment to the next significant token.
    comments: Vec<Comment>,
    on_error: ErrorReporter<'r>,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("anchor", &self.anchor)
            .field("position", &self.program.position())
            .finish()
    }
}

impl<'r> Lexer<'r> {
    /// Creates a lexer with the default (aborting) error reporter.
    #[must_use]
    pub fn new(file: SourceFile) -> Self {
        Self::with_reporter(file, Box::new(|error| Err(error)))
    }

    /// Creates a lexer with a caller-supplied error reporter.
    #[must_use]
    pub fn with_reporter(file: SourceFile, on_error: ErrorReporter<'r>) -> Self {
        Self {
            program: Scanner::new(file),
            anchor: 0,
            comments: Vec::new(),
            on_error,
        }
    }

    /// Consumes the lexer and produces the token sequence, EOF-terminated.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the reporter aborts on one.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while self.program.has_next() {
            if let Some(token) = self.scan_token()? {
                tokens.push(token);
            }
        }
        // A trailing comment has no token to attach to.
        self.comments.clear();
        self.anchor = self.program.position();
        tokens.push(Token::new(TokenKind::Eof, EcoString::new(), self.anchor));
        Ok(tokens)
    }

    /// Scans one token, or nothing for whitespace, comments, and
    /// recovered errors.
    fn scan_token(&mut self) -> Result<Option<Token>, LexError> {
        let Some(c) = self.program.advance() else {
            return Ok(None);
        };
        let token = match c {
            '(' => self.token(TokenKind::LeftParen),
            ')' => self.token(TokenKind::RightParen),
            '{' => self.token(TokenKind::LeftCurly),
            '}' => self.token(TokenKind::RightCurly),
            '.' => self.token(TokenKind::Period),
            '+' => {
                let kind = if self.program.match_char('=') {
                    TokenKind::PlusBy
                } else if self.program.match_char('+') {
                    TokenKind::Increment
                } else {
                    TokenKind::Plus
                };
                self.token(kind)
            }
            '-' => {
                let kind = if self.program.match_char('>') {
                    TokenKind::Arrow
                } else if self.program.match_char('=') {
                    TokenKind::MinusBy
                } else if self.program.match_char('-') {
                    TokenKind::Decrement
                } else {
                    TokenKind::Minus
                };
                self.token(kind)
            }
            '*' => {
                let kind = if self.program.match_char('=') {
                    TokenKind::StarBy
                } else {
                    TokenKind::Star
                };
                self.token(kind)
            }
            '%' => {
                let kind = if self.program.match_char('=') {
                    TokenKind::ModulusBy
                } else {
                    TokenKind::Modulus
                };
                self.token(kind)
            }
            '=' => {
                let kind = if self.program.match_char('=') {
                    if self.program.match_char('=') {
                        TokenKind::Identical
                    } else {
                        TokenKind::Equals
                    }
                } else {
                    TokenKind::Assign
                };
                self.token(kind)
            }
            '<' => {
                let kind = if self.program.match_char('=') {
                    TokenKind::LessThanOrEqual
                } else if self.program.match_char('<') {
                    TokenKind::LeftShift
                } else {
                    TokenKind::LessThan
                };
                self.token(kind)
            }
            '>' => {
                let kind = if self.program.match_char('=') {
                    TokenKind::GreaterThanOrEqual
                } else if self.program.match_char('>') {
                    TokenKind::RightShift
                } else {
                    TokenKind::GreaterThan
                };
                self.token(kind)
            }
            '!' => {
                let kind = if self.program.match_char('=') {
                    if self.program.match_char('=') {
                        TokenKind::NotIdentical
                    } else {
                        TokenKind::NotEquals
                    }
                } else {
                    TokenKind::LogicalNot
                };
                self.token(kind)
            }
            '|' => {
                let kind = if self.program.match_char('|') {
                    TokenKind::LogicalOr
                } else {
                    TokenKind::Or
                };
                self.token(kind)
            }
            '&' => {
                let kind = if self.program.match_char('&') {
                    TokenKind::LogicalAnd
                } else {
                    TokenKind::And
                };
                self.token(kind)
            }
            '~' => self.token(TokenKind::Negate),
            '^' => self.token(TokenKind::LogicalXor),
            '/' => return Ok(self.scan_slash()),
            '\'' => return self.scan_string(),
            c if chars::is_digit(c) => self.scan_number(c),
            c if chars::is_identifier_start(c) => self.scan_identifier(),
            c if chars::is_whitespace(c) => {
                self.anchor = self.program.position();
                return Ok(None);
            }
            _ => {
                self.report(LexErrorKind::UnexpectedCharacter)?;
                self.anchor = self.program.position();
                return Ok(None);
            }
        };
        Ok(Some(token))
    }

    /// Scans `/=`, `/`, or a line comment.
    ///
    /// A comment runs to LF, bare CR, CR+LF, or end of input; the
    /// terminator is left for the whitespace path. The trimmed comment
    /// text is buffered for attachment to the next significant token.
    fn scan_slash(&mut self) -> Option<Token> {
        if self.program.match_char('/') {
            self.program.advance_while(|c| c != '\n' && c != '\r');
            let text = self
                .program
                .substring(self.anchor, self.program.position())
                .trim();
            self.comments.push(Comment::new(text, self.anchor));
            self.anchor = self.program.position();
            None
        } else if self.program.match_char('=') {
            Some(self.token(TokenKind::SlashBy))
        } else {
            Some(self.token(TokenKind::Slash))
        }
    }

    /// Scans a string literal; the opening quote is already consumed.
    ///
    /// The lexeme excludes the surrounding quotes and no escape
    /// processing is performed: `'it\'s'` terminates at the second
    /// quote, leaving the `\` in the lexeme. An unterminated string is
    /// reported and still emits its truncated token to aid downstream
    /// recovery.
    fn scan_string(&mut self) -> Result<Option<Token>, LexError> {
        while !self.program.match_char('\'') {
            if self.program.advance().is_none() {
                self.report(LexErrorKind::UnterminatedString)?;
                let content =
                    EcoString::from(self.program.substring(self.anchor + 1, self.program.position()));
                return Ok(Some(self.token_with(TokenKind::String, content)));
            }
        }
        let content =
            EcoString::from(self.program.substring(self.anchor + 1, self.program.position() - 1));
        Ok(Some(self.token_with(TokenKind::String, content)))
    }

    /// Scans a number literal; the first digit is already consumed.
    ///
    /// `0x`/`0X` prefixes a hexadecimal literal. An exponent is only
    /// recognized immediately after the first digit, so `3e4` is one
    /// number but `12e3` lexes as `12` followed by the identifier `e3`.
    /// A `.` after the integer digits is consumed along with any digits
    /// following it, so `1.5` is one number and `1.` keeps its period.
    fn scan_number(&mut self, first: char) -> Token {
        if first == '0' && (self.program.match_char('x') || self.program.match_char('X')) {
            self.program.advance_while(chars::is_hexadecimal);
            return self.token(TokenKind::Number);
        }
        if self.program.match_char('e') || self.program.match_char('E') {
            self.program.advance_while(chars::is_digit);
            return self.token(TokenKind::Number);
        }
        self.program.advance_while(chars::is_digit);
        if self.program.match_char('.') {
            self.program.advance_while(chars::is_digit);
        }
        self.token(TokenKind::Number)
    }

    /// Scans an identifier or keyword; the first character is already
    /// consumed.
    fn scan_identifier(&mut self) -> Token {
        self.program.advance_while(chars::is_identifier);
        let lexeme = self.program.substring(self.anchor, self.program.position());
        let kind = TokenKind::keyword(lexeme).unwrap_or(TokenKind::Identifier);
        self.token(kind)
    }

    /// Creates a token whose lexeme is the text between the anchor and
    /// the cursor, then advances the anchor.
    fn token(&mut self, kind: TokenKind) -> Token {
        let content =
            EcoString::from(self.program.substring(self.anchor, self.program.position()));
        self.token_with(kind, content)
    }

    /// Creates a token with an explicit lexeme. The anchor advances to
    /// the cursor and the token's offset is derived from the lexeme
    /// length; pending comments are drained into the token.
    fn token_with(&mut self, kind: TokenKind, content: EcoString) -> Token {
        self.anchor = self.program.position();
        let offset = self.anchor - content.len();
        Token::with_comments(kind, content, offset, std::mem::take(&mut self.comments))
    }

    /// Reports an error covering the single character at the anchor.
    fn report(&mut self, kind: LexErrorKind) -> Result<(), LexError> {
        let contents = self.program.file().contents();
        let width = contents[self.anchor..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        let text = EcoString::from(&contents[self.anchor..self.anchor + width]);
        let span = FileSpan::new(self.program.file().clone(), self.anchor, text);
        (self.on_error)(LexError::new(kind, &span))
    }
}
