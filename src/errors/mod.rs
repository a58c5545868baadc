//! Error types for lexing and parsing.
//!
//! This module defines the single error type surfaced by the lexer and the
//! parser. It includes:
//!
//! - Error structures with source position information
//! - One variant per fatal lexical or syntactic condition
//! - Error names and suggestions for diagnostics

pub mod errors;
