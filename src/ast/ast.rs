use crate::lexer::tokens::{LiteralValue, Token};

use super::{
    expressions::{BinaryExpr, LiteralExpr, UnaryExpr, VariableExpr},
    statements::{BlockStmt, ExpressionStmt, IfStmt, PrintStmt, VarStmt},
};

/// Expression node.
///
/// Each variant owns its children outright, so a parsed program is always a
/// strict tree. Code that walks expressions implements [`ExprVisitor`] rather
/// than matching on the variants itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Variable(VariableExpr),
}

impl Expr {
    pub fn literal(value: LiteralValue) -> Self {
        Expr::Literal(LiteralExpr { value })
    }

    pub fn unary(operator: Token, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn variable(name: Token) -> Self {
        Expr::Variable(VariableExpr { name })
    }

    /// Dispatches to the visitor method for this variant.
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Expr::Literal(expr) => visitor.visit_literal_expr(expr),
            Expr::Unary(expr) => visitor.visit_unary_expr(expr),
            Expr::Binary(expr) => visitor.visit_binary_expr(expr),
            Expr::Variable(expr) => visitor.visit_variable_expr(expr),
        }
    }
}

/// Statement node. A program is an ordered `Vec<Stmt>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Print(PrintStmt),
    Var(VarStmt),
    If(IfStmt),
    Block(BlockStmt),
}

impl Stmt {
    pub fn expression(expression: Expr) -> Self {
        Stmt::Expression(ExpressionStmt { expression })
    }

    pub fn print(expression: Expr) -> Self {
        Stmt::Print(PrintStmt { expression })
    }

    pub fn var(name: Token, initializer: Option<Expr>) -> Self {
        Stmt::Var(VarStmt { name, initializer })
    }

    pub fn if_stmt(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Stmt::If(IfStmt {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        })
    }

    pub fn block(statements: Vec<Stmt>) -> Self {
        Stmt::Block(BlockStmt { statements })
    }

    /// Dispatches to the visitor method for this variant.
    pub fn accept<R, V: StmtVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Stmt::Expression(stmt) => visitor.visit_expression_stmt(stmt),
            Stmt::Print(stmt) => visitor.visit_print_stmt(stmt),
            Stmt::Var(stmt) => visitor.visit_var_stmt(stmt),
            Stmt::If(stmt) => visitor.visit_if_stmt(stmt),
            Stmt::Block(stmt) => visitor.visit_block_stmt(stmt),
        }
    }
}

/// One operation over expressions, with a method per variant.
///
/// `R` is whatever the operation produces: a printed string, a runtime
/// value, a `Result`, or `()` for passes that only collect state.
pub trait ExprVisitor<R> {
    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> R;
    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> R;
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> R;
    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> R;
}

/// One operation over statements, with a method per variant.
pub trait StmtVisitor<R> {
    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> R;
    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> R;
    fn visit_var_stmt(&mut self, stmt: &VarStmt) -> R;
    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> R;
    fn visit_block_stmt(&mut self, stmt: &BlockStmt) -> R;
}
