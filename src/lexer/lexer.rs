use std::{
    io::Read,
    iter::{Fuse, Peekable},
    rc::Rc,
};

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    stream::{CharStream, ReadChars},
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Pull-based tokenizer over a character stream.
///
/// Each call to [`Lexer::next_token`] consumes exactly the characters of one
/// token (plus any whitespace and comments before it). The only state kept
/// between calls is the stream cursor.
pub struct Lexer<I: CharStream> {
    chars: Peekable<Fuse<I>>,
    pos: u32,
    file: Rc<String>,
}

impl Lexer<std::vec::IntoIter<char>> {
    /// Lexes an in-memory string.
    pub fn from_source(source: &str, file: Option<String>) -> Self {
        Lexer::new(source.chars().collect::<Vec<char>>().into_iter(), file)
    }
}

impl<R: Read> Lexer<ReadChars<R>> {
    /// Lexes a byte stream such as stdin or an open file.
    pub fn from_reader(reader: R, file: Option<String>) -> Self {
        Lexer::new(ReadChars::new(reader), file)
    }
}

impl<I: CharStream> Lexer<I> {
    pub fn new(chars: I, file: Option<String>) -> Lexer<I> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            chars: chars.fuse().peekable(),
            pos: 0,
            file: file_name,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos, Rc::clone(&self.file))
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos += c.len_utf8() as u32;
        Some(c)
    }

    /// Collects `first` and every following character matching `predicate`.
    /// The first non-matching character stays in the stream.
    fn consume_while(&mut self, first: char, predicate: fn(char) -> bool) -> String {
        let mut lexeme = String::from(first);

        while let Some(&c) = self.chars.peek() {
            if !predicate(c) {
                break;
            }
            lexeme.push(c);
            self.advance();
        }

        lexeme
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            self.advance();
        }
    }

    fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.get_position(),
        }
    }

    /// Produces the next token.
    ///
    /// Once the stream is exhausted every further call returns an `EOF`
    /// token. The only failure is a digit run that does not parse as `f64`.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let token = self.lex_token()?;
        trace!(kind = %token.kind, text = %token.text, offset = token.span.start.0, "token");
        Ok(token)
    }

    fn lex_token(&mut self) -> Result<Token, Error> {
        loop {
            self.skip_whitespace();

            let start = self.get_position();
            let Some(c) = self.advance() else {
                return Ok(MK_TOKEN!(TokenKind::EOF, self.span_from(start)));
            };

            if c.is_ascii_alphabetic() {
                let identifier = self.consume_while(c, |c| c.is_ascii_alphanumeric());
                let kind = RESERVED_LOOKUP
                    .get(identifier.as_str())
                    .copied()
                    .unwrap_or(TokenKind::Identifier);

                return Ok(MK_TOKEN!(kind, identifier, f64::NAN, self.span_from(start)));
            }

            if c.is_ascii_digit() {
                let lexeme = self.consume_while(c, |c| c.is_ascii_digit() || c == '.');
                let number = match lexeme.parse::<f64>() {
                    Ok(number) => number,
                    Err(_) => {
                        return Err(Error::new(ErrorImpl::NumberParseError { token: lexeme }, start));
                    }
                };

                return Ok(MK_TOKEN!(TokenKind::Number, lexeme, number, self.span_from(start)));
            }

            if c == '#' {
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' || c == '\r' {
                        break;
                    }
                    self.advance();
                }
                continue;
            }

            return Ok(MK_TOKEN!(TokenKind::Char(c), self.span_from(start)));
        }
    }
}

/// Tokenizes a whole string, including the trailing `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::from_source(&source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_eof {
            return Ok(tokens);
        }
    }
}
