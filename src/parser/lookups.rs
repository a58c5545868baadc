use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::{Token, TokenKind};

/// Returned for any token that is not a binary operator.
pub const NO_PRECEDENCE: i32 = -1;

lazy_static! {
    static ref DEFAULT_PRECEDENCE: HashMap<char, i32> = {
        let mut map = HashMap::new();
        // Relational
        map.insert('<', 10);
        map.insert('>', 10);
        // Additive and multiplicative
        map.insert('+', 20);
        map.insert('-', 20);
        map.insert('*', 40);
        map.insert('/', 40);
        map
    };
}

/// Binary operator precedence, higher binds tighter.
///
/// Each parser owns its own table; there is no process-wide state.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecedenceTable {
    table: HashMap<char, i32>,
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        PrecedenceTable {
            table: DEFAULT_PRECEDENCE.clone(),
        }
    }
}

impl PrecedenceTable {
    pub fn empty() -> Self {
        PrecedenceTable {
            table: HashMap::new(),
        }
    }

    /// Returns a copy of this table with `operator` bound at `precedence`.
    pub fn with_operator(mut self, operator: char, precedence: i32) -> Self {
        self.table.insert(operator, precedence);
        self
    }

    /// Precedence of `token` as a binary operator, or [`NO_PRECEDENCE`] for
    /// non-ASCII characters, keywords, identifiers, numbers, end of input and
    /// anything mapped to zero or below.
    pub fn get_precedence(&self, token: &Token) -> i32 {
        match token.kind {
            TokenKind::Char(c) if c.is_ascii() => match self.table.get(&c) {
                Some(&precedence) if precedence > 0 => precedence,
                _ => NO_PRECEDENCE,
            },
            _ => NO_PRECEDENCE,
        }
    }
}
