/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: The closed set of expression forms
/// - declarations: Prototypes, functions and top-level units
pub mod declarations;
pub mod expressions;
