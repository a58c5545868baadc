use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Reserved
    Def,
    Extern,
    If,
    Then,
    Else,

    Identifier,
    Number,

    /// Any other single character: operators, punctuation and unknown symbols.
    Char(char),
}

impl TokenKind {
    pub fn is_char(&self, c: char) -> bool {
        *self == TokenKind::Char(c)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EOF => write!(f, "end of input"),
            TokenKind::Def => write!(f, "def"),
            TokenKind::Extern => write!(f, "extern"),
            TokenKind::If => write!(f, "if"),
            TokenKind::Then => write!(f, "then"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Char(c) => write!(f, "'{}'", c.escape_default()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw lexeme for identifiers, keywords and numbers.
    pub text: String,
    /// Only meaningful for `TokenKind::Number`; NaN otherwise.
    pub number: f64,
    pub span: Span,
}

impl Token {
    pub fn is_char(&self, c: char) -> bool {
        self.kind.is_char(c)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number => write!(f, "{} `{}`", self.kind, self.text),
            _ => write!(f, "{}", self.kind),
        }
    }
}
