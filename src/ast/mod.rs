/// AST (Abstract Syntax Tree) module
/// Contains the tree produced by parsing
///
/// Submodules:
/// - ast: The Program root
/// - statements: Statements and their metadata
/// - values: Literal and object values
pub mod ast;
pub mod statements;
pub mod values;

#[cfg(test)]
mod tests;
