/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The expression node and its closed set of kinds
/// - expressions: Payloads of the individual node kinds
/// - operators: Binary operators and their source symbols
/// - types: The primitive types of the language
pub mod ast;
pub mod expressions;
pub mod operators;
pub mod types;
