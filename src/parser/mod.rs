//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from the lexer and
//! builds top-level units. It uses recursive descent for primary forms and
//! precedence climbing for binary operators, and handles:
//!
//! - Primary expressions (numbers, variables, calls, parentheses)
//! - Binary expressions with a per-parser precedence table
//! - Prototypes, definitions, externs and bare top-level expressions
//! - The top-level driver loop and its error policy

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
