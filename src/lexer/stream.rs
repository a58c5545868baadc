//! Character stream adapters.
//!
//! The lexer only needs "give me the next character or tell me the input is
//! over", so anything that iterates over `char`s can feed it.

use std::io::{BufReader, Bytes, Read};

use tracing::error;

/// A source of characters for the lexer.
pub trait CharStream: Iterator<Item = char> {}

impl<T: Iterator<Item = char>> CharStream for T {}

/// Reads a byte stream (stdin, a file) one byte at a time, mapping each byte
/// to the character with the same code.
///
/// A read failure ends the stream.
pub struct ReadChars<R: Read> {
    bytes: Bytes<BufReader<R>>,
}

impl<R: Read> ReadChars<R> {
    pub fn new(reader: R) -> Self {
        ReadChars {
            bytes: BufReader::new(reader).bytes(),
        }
    }
}

impl<R: Read> Iterator for ReadChars<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self.bytes.next()? {
            Ok(byte) => Some(byte as char),
            Err(err) => {
                error!(%err, "failed to read input, treating as end of input");
                None
            }
        }
    }
}
