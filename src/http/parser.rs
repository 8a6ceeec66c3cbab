//! Request-line parser.
//!
//! Grammar (only the request line is examined; every byte after the
//! terminating CRLF is ignored):
//!
//! ```text
//! request       = request-line {any byte}
//! request-line  = METHOD ' ' uri ' ' VERSION CRLF
//! uri           = uri-part {uri-part}
//! uri-part      = '/' {'/'} uri-part-body
//! uri-part-body = {any byte in 0x21..=0x7E except '/'}
//! ```
//!
//! Parsing is a single left-to-right pass over a [`Cursor`]. A failed
//! match is reported as a [`ParseError`] value naming the rule that did
//! not hold; nothing is recovered or retried.

use thiserror::Error;

use crate::http::request::{Method, Request, Version};

pub const CRLF: &[u8] = b"\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("request line does not start with a supported method")]
    InvalidMethod,
    #[error("expected a single space at byte {0}")]
    ExpectedSpace(usize),
    #[error("request URI must start with '/' at byte {0}")]
    InvalidUri(usize),
    #[error("unsupported or malformed version at byte {0}")]
    InvalidVersion(usize),
    #[error("request line is not terminated by CRLF at byte {0}")]
    MissingTerminator(usize),
}

/// A read position over the raw request bytes.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// The bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Consumes `literal` if the remaining input starts with it.
    pub fn eat(&mut self, literal: &[u8]) -> bool {
        if self.remaining().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `pred` holds and returns them.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &self.buf[start..self.pos]
    }
}

/// Parses the request line at the start of `buf`.
///
/// # Example
///
/// ```
/// # use mini_http::http::parser::parse_request;
/// let req = parse_request(b"GET //foo/bar/ HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
/// assert_eq!(req.uri(), ["foo", "bar", ""]);
/// ```
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let mut cursor = Cursor::new(buf);
    parse_request_line(&mut cursor)
}

pub fn parse_request_line(cursor: &mut Cursor<'_>) -> Result<Request, ParseError> {
    let method = parse_method(cursor)?;
    expect_space(cursor)?;
    let uri = parse_uri(cursor)?;
    expect_space(cursor)?;
    let version = parse_version(cursor)?;

    if !cursor.eat(CRLF) {
        return Err(ParseError::MissingTerminator(cursor.position()));
    }

    Ok(Request::new(method, uri, version))
}

fn parse_method(cursor: &mut Cursor<'_>) -> Result<Method, ParseError> {
    let token = cursor.take_while(|b| b.is_ascii_uppercase());
    Method::from_bytes(token).ok_or(ParseError::InvalidMethod)
}

fn parse_version(cursor: &mut Cursor<'_>) -> Result<Version, ParseError> {
    let start = cursor.position();
    let token = cursor.take_while(is_version_byte);
    Version::from_bytes(token).ok_or(ParseError::InvalidVersion(start))
}

fn is_version_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'/' || b == b'.'
}

fn expect_space(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    if cursor.eat(b" ") {
        Ok(())
    } else {
        Err(ParseError::ExpectedSpace(cursor.position()))
    }
}

fn parse_uri(cursor: &mut Cursor<'_>) -> Result<Vec<String>, ParseError> {
    let start = cursor.position();
    let mut segments = Vec::new();

    while cursor.peek() == Some(b'/') {
        segments.push(parse_uri_part(cursor));
    }

    if segments.is_empty() {
        return Err(ParseError::InvalidUri(start));
    }
    Ok(segments)
}

/// One or more slashes followed by a (possibly empty) segment body.
fn parse_uri_part(cursor: &mut Cursor<'_>) -> String {
    cursor.take_while(|b| b == b'/');
    cursor
        .take_while(is_segment_byte)
        .iter()
        .map(|&b| char::from(b))
        .collect()
}

fn is_segment_byte(b: u8) -> bool {
    b != b'/' && (0x21..=0x7e).contains(&b)
}
