// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Rill compiler core.
//!
//! This crate contains the front end of the Rill compiler:
//! - Source management (offset to line/column mapping, source spans)
//! - Lexical analysis (tokenization with comment attachment)
//! - AST traversal (visitor framework consumed by downstream passes)
//!
//! Rill is a small, whitespace-sensitive expression/statement language.
//! The lexer is deliberately newline-blind: statement termination is a
//! parser concern, decided by inspecting token offsets against the source
//! file's line table.
//!
//! The parser, module system, and code generation live in their own
//! crates and consume this one through [`source_analysis::tokenize`] and
//! the [`visit::Visitor`] trait.

pub mod ast;
pub mod print_tree;
pub mod source_analysis;
pub mod visit;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{
        CompilationUnit, Expression, FunctionDeclaration, Identifier, InvocationExpression,
    };
    pub use crate::print_tree::PrintTreeVisitor;
    pub use crate::source_analysis::{
        Lexer, SourceFile, Span, Token, TokenKind, tokenize, tokenize_with,
    };
    pub use crate::visit::Visitor;
}
