// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! AST visitor framework.
//!
//! **DDD Context:** Compilation
//!
//! Downstream passes traverse the AST through the [`Visitor`] trait:
//! one hook per node kind, dispatched via `accept` on the nodes. Hooks
//! for interior nodes default to the matching `walk_*` function, which
//! recurses into children in source order; override a hook and call the
//! walker yourself to do work on the way in or out.
//!
//! The four leaf hooks (booleans, numbers, strings, identifiers) have no
//! default — every visitor must decide what a leaf means to it.
//!
//! [`walk_invocation_expression`] deliberately visits only the
//! arguments: invocation targets get wildly different treatment across
//! passes (calls vs. accesses), so visiting the target is always an
//! explicit choice of the concrete visitor.
//!
//! # Example
//!
//! ```
//! use rill_core::ast::*;
//! use rill_core::visit::Visitor;
//!
//! #[derive(Default)]
//! struct NameCollector(Vec<String>);
//!
//! impl Visitor for NameCollector {
//!     fn visit_literal_boolean(&mut self, _: &LiteralBoolean) {}
//!     fn visit_literal_number(&mut self, _: &LiteralNumber) {}
//!     fn visit_literal_string(&mut self, _: &LiteralString) {}
//!     fn visit_identifier(&mut self, identifier: &Identifier) {
//!         self.0.push(identifier.name.to_string());
//!     }
//! }
//!
//! let unit = CompilationUnit::new(vec![FunctionDeclaration::new(
//!     "main",
//!     vec![Expression::identifier("x")],
//! )]);
//! let mut collector = NameCollector::default();
//! unit.accept(&mut collector);
//! assert_eq!(collector.0, vec!["x"]);
//! ```

use crate::ast::{
    CompilationUnit, FunctionDeclaration, Identifier, IfExpression, InvocationExpression,
    LiteralBoolean, LiteralNumber, LiteralString, ParenthesizedExpression, ReturnStatement,
    VariableDeclaration,
};

/// Per-node-kind traversal hooks.
///
/// Interior hooks default to a recursive walk; leaf hooks must be
/// implemented.
pub trait Visitor {
    /// Visits a compilation unit. Defaults to walking every function.
    fn visit_compilation_unit(&mut self, unit: &CompilationUnit) {
        walk_compilation_unit(self, unit);
    }

    /// Visits a function declaration. Defaults to walking the body.
    fn visit_function_declaration(&mut self, function: &FunctionDeclaration) {
        walk_function_declaration(self, function);
    }

    /// Visits a variable declaration. Defaults to walking the value.
    fn visit_variable_declaration(&mut self, declaration: &VariableDeclaration) {
        walk_variable_declaration(self, declaration);
    }

    /// Visits a boolean literal.
    fn visit_literal_boolean(&mut self, literal: &LiteralBoolean);

    /// Visits a number literal.
    fn visit_literal_number(&mut self, literal: &LiteralNumber);

    /// Visits a string literal.
    fn visit_literal_string(&mut self, literal: &LiteralString);

    /// Visits an identifier.
    fn visit_identifier(&mut self, identifier: &Identifier);

    /// Visits a parenthesized expression. Defaults to walking the body.
    fn visit_parenthesized_expression(&mut self, expression: &ParenthesizedExpression) {
        walk_parenthesized_expression(self, expression);
    }

    /// Visits a conditional. Defaults to walking condition, then-body,
    /// and else-body, in that order.
    fn visit_if_expression(&mut self, expression: &IfExpression) {
        walk_if_expression(self, expression);
    }

    /// Visits an invocation. Defaults to walking the arguments only —
    /// never the target.
    fn visit_invocation_expression(&mut self, expression: &InvocationExpression) {
        walk_invocation_expression(self, expression);
    }

    /// Visits a return statement. Defaults to walking the value.
    fn visit_return_statement(&mut self, statement: &ReturnStatement) {
        walk_return_statement(self, statement);
    }
}

/// Visits every function of the unit.
pub fn walk_compilation_unit<V: Visitor + ?Sized>(visitor: &mut V, unit: &CompilationUnit) {
    for function in &unit.functions {
        visitor.visit_function_declaration(function);
    }
}

/// Visits every body element of the function.
pub fn walk_function_declaration<V: Visitor + ?Sized>(
    visitor: &mut V,
    function: &FunctionDeclaration,
) {
    for element in &function.body {
        element.accept(visitor);
    }
}

/// Visits the declaration's value.
pub fn walk_variable_declaration<V: Visitor + ?Sized>(
    visitor: &mut V,
    declaration: &VariableDeclaration,
) {
    declaration.value.accept(visitor);
}

/// Visits every body element of the parenthesized expression.
pub fn walk_parenthesized_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    expression: &ParenthesizedExpression,
) {
    for element in &expression.body {
        element.accept(visitor);
    }
}

/// Visits the condition, each then-body element, and each else-body
/// element, in that order.
pub fn walk_if_expression<V: Visitor + ?Sized>(visitor: &mut V, expression: &IfExpression) {
    expression.condition.accept(visitor);
    for element in &expression.then_body {
        element.accept(visitor);
    }
    for element in &expression.else_body {
        element.accept(visitor);
    }
}

/// Visits each argument. The target is not visited; concrete visitors
/// opt in explicitly.
pub fn walk_invocation_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    expression: &InvocationExpression,
) {
    for argument in &expression.arguments {
        argument.accept(visitor);
    }
}

/// Visits the returned value.
pub fn walk_return_statement<V: Visitor + ?Sized>(visitor: &mut V, statement: &ReturnStatement) {
    statement.value.accept(visitor);
}
