//! Unit tests for the AST node model and its visitors.

use crate::lexer::tokens::{LiteralValue, Token, TokenKind};

use super::{
    ast::{Expr, ExprVisitor, Stmt, StmtVisitor},
    expressions::{BinaryExpr, LiteralExpr, UnaryExpr, VariableExpr},
    printer::AstPrinter,
    statements::{BlockStmt, ExpressionStmt, IfStmt, PrintStmt, VarStmt},
};

fn number(value: f64) -> Expr {
    Expr::literal(LiteralValue::Number(value))
}

fn op(kind: TokenKind, lexeme: &str) -> Token {
    Token::new(kind, lexeme, None)
}

fn ident(name: &str) -> Token {
    Token::new(TokenKind::Identifier, name, None)
}

/// Counts nodes per kind, returning nothing from each visit.
#[derive(Default)]
struct NodeCounter {
    literals: usize,
    unaries: usize,
    binaries: usize,
    variables: usize,
    statements: usize,
}

impl ExprVisitor<()> for NodeCounter {
    fn visit_literal_expr(&mut self, _expr: &LiteralExpr) {
        self.literals += 1;
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) {
        self.unaries += 1;
        expr.operand.accept(self);
    }

    fn visit_binary_expr(&mut self, expr: &BinaryExpr) {
        self.binaries += 1;
        expr.left.accept(self);
        expr.right.accept(self);
    }

    fn visit_variable_expr(&mut self, _expr: &VariableExpr) {
        self.variables += 1;
    }
}

impl StmtVisitor<()> for NodeCounter {
    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) {
        self.statements += 1;
        stmt.expression.accept(self);
    }

    fn visit_print_stmt(&mut self, stmt: &PrintStmt) {
        self.statements += 1;
        stmt.expression.accept(self);
    }

    fn visit_var_stmt(&mut self, stmt: &VarStmt) {
        self.statements += 1;
        if let Some(initializer) = &stmt.initializer {
            initializer.accept(self);
        }
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) {
        self.statements += 1;
        stmt.condition.accept(self);
        stmt.then_branch.accept(self);
        if let Some(else_branch) = &stmt.else_branch {
            else_branch.accept(self);
        }
    }

    fn visit_block_stmt(&mut self, stmt: &BlockStmt) {
        self.statements += 1;
        for inner in stmt.iter() {
            inner.accept(self);
        }
    }
}

/// Folds constant arithmetic, failing on anything it cannot evaluate.
struct Folder;

impl ExprVisitor<Result<f64, String>> for Folder {
    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> Result<f64, String> {
        match expr.value {
            LiteralValue::Number(value) => Ok(value),
            ref other => Err(format!("not a number: {}", other)),
        }
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> Result<f64, String> {
        let operand = expr.operand.accept(self)?;
        match expr.operator.kind {
            TokenKind::Minus => Ok(-operand),
            _ => Ok(operand),
        }
    }

    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> Result<f64, String> {
        let left = expr.left.accept(self)?;
        let right = expr.right.accept(self)?;
        match expr.operator.kind {
            TokenKind::Plus => Ok(left + right),
            TokenKind::Minus => Ok(left - right),
            TokenKind::Star => Ok(left * right),
            TokenKind::Slash => Ok(left / right),
            other => Err(format!("cannot fold {}", other)),
        }
    }

    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> Result<f64, String> {
        Err(format!("unbound variable {}", expr.name.lexeme))
    }
}

#[test]
fn test_accept_dispatches_to_matching_variant() {
    let program = vec![
        Stmt::var(ident("x"), Some(number(1.0))),
        Stmt::if_stmt(
            Expr::variable(ident("x")),
            Stmt::print(Expr::unary(op(TokenKind::Minus, "-"), number(2.0))),
            Some(Stmt::block(vec![Stmt::expression(Expr::binary(
                number(3.0),
                op(TokenKind::Plus, "+"),
                number(4.0),
            ))])),
        ),
    ];

    let mut counter = NodeCounter::default();
    for stmt in &program {
        stmt.accept(&mut counter);
    }

    assert_eq!(counter.statements, 5);
    assert_eq!(counter.literals, 4);
    assert_eq!(counter.unaries, 1);
    assert_eq!(counter.binaries, 1);
    assert_eq!(counter.variables, 1);
}

#[test]
fn test_visitor_chooses_result_type() {
    let expr = Expr::binary(
        Expr::unary(op(TokenKind::Minus, "-"), number(2.0)),
        op(TokenKind::Star, "*"),
        Expr::binary(number(3.0), op(TokenKind::Plus, "+"), number(4.0)),
    );
    assert_eq!(expr.accept(&mut Folder), Ok(-14.0));

    let unbound = Expr::binary(number(1.0), op(TokenKind::Plus, "+"), Expr::variable(ident("y")));
    assert_eq!(unbound.accept(&mut Folder), Err("unbound variable y".to_string()));
}

#[test]
fn test_accept_through_trait_object() {
    let expr = Expr::literal(LiteralValue::Boolean(true));
    let visitor: &mut dyn ExprVisitor<String> = &mut AstPrinter::new();

    assert_eq!(expr.accept(visitor), "true");
}

#[test]
fn test_print_literals() {
    let mut printer = AstPrinter::new();

    assert_eq!(printer.print_expr(&number(1.0)), "1");
    assert_eq!(printer.print_expr(&number(2.5)), "2.5");
    assert_eq!(
        printer.print_expr(&Expr::literal(LiteralValue::String("hi \"there\"".to_string()))),
        "\"hi \\\"there\\\"\""
    );
    assert_eq!(printer.print_expr(&Expr::literal(LiteralValue::Boolean(false))), "false");
    assert_eq!(printer.print_expr(&Expr::literal(LiteralValue::Nil)), "nil");
}

#[test]
fn test_print_statements() {
    let mut printer = AstPrinter::new();
    let program = vec![
        Stmt::var(ident("a"), None),
        Stmt::var(ident("b"), Some(number(2.0))),
        Stmt::if_stmt(
            Expr::variable(ident("b")),
            Stmt::print(Expr::variable(ident("a"))),
            None,
        ),
        Stmt::block(vec![]),
    ];

    assert_eq!(
        printer.print_program(&program),
        "(var a)\n(var b 2)\n(if b (print a))\n(block)"
    );
}

#[test]
fn test_nodes_own_their_children() {
    let original = Stmt::block(vec![Stmt::print(number(1.0))]);
    let mut copy = original.clone();

    if let Stmt::Block(block) = &mut copy {
        block.statements.push(Stmt::print(number(2.0)));
    }

    match (&original, &copy) {
        (Stmt::Block(original), Stmt::Block(copy)) => {
            assert_eq!(original.len(), 1);
            assert_eq!(copy.len(), 2);
        }
        _ => panic!("Expected two blocks"),
    }
}
