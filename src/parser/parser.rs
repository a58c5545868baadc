//! Parser state and the top-level driver.
//!
//! This module contains the `Parser` struct, which pulls tokens from a
//! `Lexer` on demand and keeps a small pushback buffer for lookahead, plus
//! the top-level loop that splits a stream into definitions, externs and
//! bare expressions.
//!
//! Grammar rules live in `expr` (expressions) and `decl` (declarations).

use std::collections::VecDeque;

use tracing::{debug, error};

use crate::{
    ast::declarations::TopLevel,
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        stream::CharStream,
        tokens::{Token, TokenKind},
    },
};

use super::{
    decl::{parse_definition, parse_extern, parse_top_level_expr},
    lookups::PrecedenceTable,
};

/// The grammar never reads more than one token past what a rule consumes.
const MAX_PUSHBACK: usize = 2;

/// The main parser structure that maintains parsing state.
pub struct Parser<I: CharStream> {
    /// Token source
    lexer: Lexer<I>,
    /// Tokens read but not yet consumed, next one at the front
    buffer: VecDeque<Token>,
    /// Binary operator precedence for this parser
    precedence: PrecedenceTable,
}

impl Parser<std::vec::IntoIter<char>> {
    /// Creates a parser over an in-memory string with the default precedence.
    pub fn from_source(source: &str, file: Option<String>) -> Self {
        Parser::new(Lexer::from_source(source, file), PrecedenceTable::default())
    }
}

impl<I: CharStream> Parser<I> {
    pub fn new(lexer: Lexer<I>, precedence: PrecedenceTable) -> Self {
        Parser {
            lexer,
            buffer: VecDeque::with_capacity(MAX_PUSHBACK),
            precedence,
        }
    }

    /// Returns the front of the pushback buffer, or a fresh token from the
    /// lexer when the buffer is empty.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        match self.buffer.pop_front() {
            Some(token) => Ok(token),
            None => self.lexer.next_token(),
        }
    }

    /// Returns `token` to the front of the stream so the next call to
    /// `next_token` yields it again.
    pub fn push_back(&mut self, token: Token) {
        debug_assert!(self.buffer.len() < MAX_PUSHBACK, "pushback buffer overflow");
        self.buffer.push_front(token);
    }

    pub fn get_precedence(&self, token: &Token) -> i32 {
        self.precedence.get_precedence(token)
    }

    pub fn get_precedence_table(&self) -> &PrecedenceTable {
        &self.precedence
    }

    /// Parses the next top-level unit.
    ///
    /// `;` separators are skipped. Returns `Ok(None)` once the input is
    /// exhausted; this keeps holding for every later call.
    pub fn parse_top_level(&mut self) -> Result<Option<TopLevel>, Error> {
        loop {
            let token = self.next_token()?;

            let unit = match token.kind {
                TokenKind::EOF => return Ok(None),
                TokenKind::Char(';') => continue,
                TokenKind::Def => TopLevel::Definition(parse_definition(self, token)?),
                TokenKind::Extern => TopLevel::Extern(parse_extern(self, token)?),
                _ => TopLevel::Expression(parse_top_level_expr(self, token)?),
            };

            debug!(kind = unit.describe(), unit = %unit, "parsed top-level unit");
            return Ok(Some(unit));
        }
    }
}

impl<I: CharStream> Iterator for Parser<I> {
    type Item = Result<TopLevel, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_top_level().transpose()
    }
}

/// What the driver does after a unit fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failure.
    Halt,
    /// Report the failure and continue with the next unit.
    #[default]
    Continue,
}

#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    pub precedence: PrecedenceTable,
    pub error_policy: ErrorPolicy,
}

/// Receives every successfully parsed top-level unit.
pub trait Consumer {
    fn consume(&mut self, unit: TopLevel);
}

impl Consumer for Vec<TopLevel> {
    fn consume(&mut self, unit: TopLevel) {
        self.push(unit);
    }
}

/// Runs the top-level loop, handing each unit to `consumer`.
///
/// Returns the errors encountered: at most one under `ErrorPolicy::Halt`.
pub fn drive<I: CharStream, C: Consumer>(
    parser: &mut Parser<I>,
    consumer: &mut C,
    policy: ErrorPolicy,
) -> Vec<Error> {
    let mut errors = vec![];

    for result in parser {
        match result {
            Ok(unit) => consumer.consume(unit),
            Err(err) => {
                error!(error = %err, name = err.get_error_name(), "failed to parse top-level unit");
                errors.push(err);

                if policy == ErrorPolicy::Halt {
                    break;
                }
            }
        }
    }

    errors
}

/// Parses all of `source`, halting at the first error.
pub fn parse(source: &str, file: Option<String>) -> Result<Vec<TopLevel>, Error> {
    let config = ParserConfig {
        error_policy: ErrorPolicy::Halt,
        ..ParserConfig::default()
    };

    let (units, mut errors) = parse_with_config(source, file, config);
    match errors.pop() {
        Some(err) => Err(err),
        None => Ok(units),
    }
}

/// Parses all of `source` under `config`, returning the units that parsed
/// and the errors reported along the way.
pub fn parse_with_config(
    source: &str,
    file: Option<String>,
    config: ParserConfig,
) -> (Vec<TopLevel>, Vec<Error>) {
    let mut parser = Parser::new(Lexer::from_source(source, file), config.precedence);
    let mut units = vec![];

    let errors = drive(&mut parser, &mut units, config.error_policy);

    (units, errors)
}
