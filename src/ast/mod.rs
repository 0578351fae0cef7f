/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: the `Node` rendering contract and the Program/Statement/Expression sum types
/// - expressions: definitions for each expression variant
/// - statements: definitions for each statement variant
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
