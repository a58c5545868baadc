//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns a character stream
//! into tokens on demand for the parser. It handles:
//!
//! - Recognition of keywords, identifiers and numeric literals
//! - Single-character operator and punctuation tokens
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod stream;
pub mod tokens;
