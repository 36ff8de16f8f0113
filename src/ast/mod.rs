/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` and `Stmt` node enums and their visitor traits
/// - expressions: Node payloads for each expression kind
/// - statements: Node payloads for each statement kind
/// - printer: A visitor rendering the tree in parenthesised prefix form
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;

#[cfg(test)]
mod tests;
