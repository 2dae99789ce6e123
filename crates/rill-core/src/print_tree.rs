// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! AST tree printer.
//!
//! [`PrintTreeVisitor`] renders an AST as an indented text tree, one
//! node per line with its key attributes. The output is deterministic —
//! the same tree always prints the same bytes — which makes it the
//! cheapest way to assert AST shape in tests and to eyeball parser
//! output.
//!
//! ```
//! use rill_core::ast::*;
//! use rill_core::print_tree::print_tree;
//!
//! let unit = CompilationUnit::new(vec![FunctionDeclaration::new(
//!     "main",
//!     vec![Expression::string("Hello")],
//! )]);
//! assert_eq!(
//!     print_tree(&unit),
//!     "CompilationUnit\n  FunctionDeclaration name=main\n    LiteralString value=Hello\n"
//! );
//! ```

use ecow::EcoString;

use crate::ast::{
    CompilationUnit, FunctionDeclaration, Identifier, IfExpression, InvocationExpression,
    LiteralBoolean, LiteralNumber, LiteralString, ParenthesizedExpression, ReturnStatement,
    VariableDeclaration,
};
use crate::visit::{Visitor, walk_invocation_expression};

/// Renders a compilation unit with the default two-space indent.
#[must_use]
pub fn print_tree(unit: &CompilationUnit) -> String {
    let mut visitor = PrintTreeVisitor::new();
    unit.accept(&mut visitor);
    visitor.finish()
}

/// A visitor that writes an indented text tree of the AST.
///
/// Node labels carry key attributes (`name=`, `value=`). Invocations
/// print `Target:` and `Args:` subheadings; conditionals print `If`,
/// `Then`, and `Else` subheadings, omitting `Else` when the else-body
/// is empty.
pub struct PrintTreeVisitor {
    output: String,
    indent: EcoString,
    depth: usize,
}

impl PrintTreeVisitor {
    /// Creates a printer with the default two-space indent.
    #[must_use]
    pub fn new() -> Self {
        Self::with_indent("  ")
    }

    /// Creates a printer with a custom indent unit.
    #[must_use]
    pub fn with_indent(indent: impl Into<EcoString>) -> Self {
        Self {
            output: String::new(),
            indent: indent.into(),
            depth: 0,
        }
    }

    /// Consumes the printer and returns the rendered tree.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }

    /// Writes one line at the current depth.
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(&self.indent);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Runs `body` one indent level deeper.
    fn nested(&mut self, body: impl FnOnce(&mut Self)) {
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }
}

impl Default for PrintTreeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for PrintTreeVisitor {
    fn visit_compilation_unit(&mut self, unit: &CompilationUnit) {
        self.line("CompilationUnit");
        self.nested(|v| crate::visit::walk_compilation_unit(v, unit));
    }

    fn visit_function_declaration(&mut self, function: &FunctionDeclaration) {
        self.line(&format!("FunctionDeclaration name={}", function.name));
        self.nested(|v| crate::visit::walk_function_declaration(v, function));
    }

    fn visit_variable_declaration(&mut self, declaration: &VariableDeclaration) {
        self.line(&format!("VariableDeclaration name={}", declaration.name));
        self.nested(|v| crate::visit::walk_variable_declaration(v, declaration));
    }

    fn visit_literal_boolean(&mut self, literal: &LiteralBoolean) {
        self.line(&format!("LiteralBoolean value={}", literal.value));
    }

    fn visit_literal_number(&mut self, literal: &LiteralNumber) {
        self.line(&format!("LiteralNumber value={}", literal.value));
    }

    fn visit_literal_string(&mut self, literal: &LiteralString) {
        self.line(&format!("LiteralString value={}", literal.value));
    }

    fn visit_identifier(&mut self, identifier: &Identifier) {
        self.line(&format!("Identifier name={}", identifier.name));
    }

    fn visit_parenthesized_expression(&mut self, expression: &ParenthesizedExpression) {
        self.line("ParenthesizedExpression");
        self.nested(|v| crate::visit::walk_parenthesized_expression(v, expression));
    }

    fn visit_if_expression(&mut self, expression: &IfExpression) {
        self.line("IfExpression");
        self.nested(|v| {
            v.line("If");
            v.nested(|v| expression.condition.accept(v));
            v.line("Then");
            v.nested(|v| {
                for element in &expression.then_body {
                    element.accept(v);
                }
            });
            if !expression.else_body.is_empty() {
                v.line("Else");
                v.nested(|v| {
                    for element in &expression.else_body {
                        element.accept(v);
                    }
                });
            }
        });
    }

    fn visit_invocation_expression(&mut self, expression: &InvocationExpression) {
        self.line("InvocationExpression");
        self.nested(|v| {
            v.line("Target:");
            v.nested(|v| expression.target.accept(v));
            v.line("Args:");
            v.nested(|v| walk_invocation_expression(v, expression));
        });
    }

    fn visit_return_statement(&mut self, statement: &ReturnStatement) {
        self.line("ReturnStatement");
        self.nested(|v| crate::visit::walk_return_statement(v, statement));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expression;

    fn hello_unit() -> CompilationUnit {
        CompilationUnit::new(vec![FunctionDeclaration::new(
            "main",
            vec![Expression::Invocation(InvocationExpression::new(
                Expression::identifier("print"),
                vec![Expression::string("Hello")],
            ))],
        )])
    }

    #[test]
    fn prints_invocation_with_subheadings() {
        let expected = "\
CompilationUnit
  FunctionDeclaration name=main
    InvocationExpression
      Target:
        Identifier name=print
      Args:
        LiteralString value=Hello
";
        assert_eq!(print_tree(&hello_unit()), expected);
    }

    #[test]
    fn prints_if_with_else() {
        let unit = CompilationUnit::new(vec![FunctionDeclaration::new(
            "choose",
            vec![Expression::If(IfExpression::with_else(
                Expression::boolean(true),
                vec![Expression::number("1")],
                vec![Expression::number("2")],
            ))],
        )]);
        let expected = "\
CompilationUnit
  FunctionDeclaration name=choose
    IfExpression
      If
        LiteralBoolean value=true
      Then
        LiteralNumber value=1
      Else
        LiteralNumber value=2
";
        assert_eq!(print_tree(&unit), expected);
    }

    #[test]
    fn omits_else_when_empty() {
        let unit = CompilationUnit::new(vec![FunctionDeclaration::new(
            "check",
            vec![Expression::If(IfExpression::new(
                Expression::identifier("ready"),
                vec![Expression::Return(ReturnStatement::new(
                    Expression::boolean(false),
                ))],
            ))],
        )]);
        let output = print_tree(&unit);
        assert!(output.contains("If\n"));
        assert!(output.contains("Then\n"));
        assert!(!output.contains("Else"));
        assert!(output.contains("ReturnStatement\n"));
    }

    #[test]
    fn prints_variable_and_parenthesized_nodes() {
        let unit = CompilationUnit::new(vec![FunctionDeclaration::new(
            "main",
            vec![Expression::Variable(VariableDeclaration::new(
                "x",
                Expression::Parenthesized(ParenthesizedExpression::new(vec![
                    Expression::number("1"),
                    Expression::number("2"),
                ])),
            ))],
        )]);
        let expected = "\
CompilationUnit
  FunctionDeclaration name=main
    VariableDeclaration name=x
      ParenthesizedExpression
        LiteralNumber value=1
        LiteralNumber value=2
";
        assert_eq!(print_tree(&unit), expected);
    }

    #[test]
    fn output_is_deterministic() {
        let unit = hello_unit();
        assert_eq!(print_tree(&unit), print_tree(&unit));
    }

    #[test]
    fn indent_is_configurable() {
        let mut visitor = PrintTreeVisitor::with_indent("    ");
        hello_unit().accept(&mut visitor);
        let output = visitor.finish();
        assert!(output.contains("\n    FunctionDeclaration name=main"));
        assert!(output.contains("\n                LiteralString value=Hello"));
    }

    #[test]
    fn empty_unit_prints_root_only() {
        assert_eq!(print_tree(&CompilationUnit::new(Vec::new())), "CompilationUnit\n");
    }
}
