//! Parenthesised prefix rendering of the AST.
//!
//! `print 1 + 2 * 3;` renders as `(print (+ 1 (* 2 3)))`. The output makes
//! grouping explicit, which is what the binary shows and what most parser
//! tests compare against.

use crate::lexer::tokens::LiteralValue;

use super::{
    ast::{Expr, ExprVisitor, Stmt, StmtVisitor},
    expressions::{BinaryExpr, LiteralExpr, UnaryExpr, VariableExpr},
    statements::{BlockStmt, ExpressionStmt, IfStmt, PrintStmt, VarStmt},
};

#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter
    }

    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }

    /// Renders every statement of a program, one per line.
    pub fn print_program(&mut self, program: &[Stmt]) -> String {
        program
            .iter()
            .map(|stmt| self.print_stmt(stmt))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn parenthesize(&mut self, name: &str, parts: Vec<String>) -> String {
        let mut out = format!("({}", name);
        for part in parts {
            out.push(' ');
            out.push_str(&part);
        }
        out.push(')');
        out
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> String {
        match &expr.value {
            LiteralValue::String(value) => format!("{:?}", value),
            value => value.to_string(),
        }
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> String {
        let operand = self.print_expr(&expr.operand);
        self.parenthesize(&expr.operator.lexeme, vec![operand])
    }

    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> String {
        let left = self.print_expr(&expr.left);
        let right = self.print_expr(&expr.right);
        self.parenthesize(&expr.operator.lexeme, vec![left, right])
    }

    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> String {
        expr.name.lexeme.clone()
    }
}

impl StmtVisitor<String> for AstPrinter {
    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> String {
        let expression = self.print_expr(&stmt.expression);
        self.parenthesize("expr", vec![expression])
    }

    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> String {
        let expression = self.print_expr(&stmt.expression);
        self.parenthesize("print", vec![expression])
    }

    fn visit_var_stmt(&mut self, stmt: &VarStmt) -> String {
        let mut parts = vec![stmt.name.lexeme.clone()];
        if let Some(initializer) = &stmt.initializer {
            parts.push(self.print_expr(initializer));
        }
        self.parenthesize("var", parts)
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> String {
        let mut parts = vec![
            self.print_expr(&stmt.condition),
            self.print_stmt(&stmt.then_branch),
        ];
        if let Some(else_branch) = &stmt.else_branch {
            parts.push(self.print_stmt(else_branch));
        }
        self.parenthesize("if", parts)
    }

    fn visit_block_stmt(&mut self, stmt: &BlockStmt) -> String {
        let parts = stmt.iter().map(|inner| self.print_stmt(inner)).collect();
        self.parenthesize("block", parts)
    }
}
