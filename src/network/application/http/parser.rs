//! Response head parsing.
//!
//! [`parse_head`] works on whatever prefix of the response is buffered and
//! either finds the complete head or reports that more bytes are needed. It
//! never looks past the slice it is given.

use super::encoding::TransferEncoding;
use super::scan::{find_first, starts_with};
use crate::network::error::Error;

const TRANSFER_ENCODING: &[u8] = b"Transfer-Encoding:";

/// Why a buffered response head could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The server closed the connection without sending anything.
    Empty,
    /// The blank line ending the head has not been received yet.
    Incomplete,
    /// The status line has no numeric status code after its first space.
    MissingStatusCode,
    /// The head does not fit in the response buffer.
    HeadersTooLarge,
}

impl From<ParseError> for Error {
    fn from(_: ParseError) -> Self {
        Error::InvalidResponse
    }
}

/// A parsed response head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Head {
    /// The numeric status code.
    pub status_code: i32,
    /// Transfer codings declared by the last `Transfer-Encoding` header.
    pub transfer_encodings: TransferEncoding,
    /// Offset of the first body byte, just past the blank line.
    pub body_start: usize,
}

/// Parses the status line and header lines at the start of `buf`.
///
/// Lines end at `\n`, with an optional preceding `\r`. The head ends at the
/// first empty line. Only `Transfer-Encoding` is interpreted, matched
/// case-sensitively; every other header is skipped.
///
/// ```
/// use libhttp::network::application::http::parser::parse_head;
///
/// let head = parse_head(b"HTTP/1.0 404 Not Found\r\n\r\n").unwrap();
/// assert_eq!(head.status_code, 404);
/// assert_eq!(head.body_start, 26);
/// ```
pub fn parse_head(buf: &[u8]) -> Result<Head, ParseError> {
    let status_end = find_first(buf, b'\n', buf.len()).ok_or(ParseError::Incomplete)?;
    let status_code = parse_status_code(trim_cr(&buf[..status_end]))?;

    let mut transfer_encodings = TransferEncoding::NORMAL;
    let mut pos = status_end + 1;
    loop {
        let rest = &buf[pos..];
        let line_end = find_first(rest, b'\n', rest.len()).ok_or(ParseError::Incomplete)?;
        let line = trim_cr(&rest[..line_end]);
        if line.is_empty() {
            return Ok(Head {
                status_code,
                transfer_encodings,
                body_start: pos + line_end + 1,
            });
        }

        tracing::trace!(len = line.len(), "header line");
        if starts_with(line, TRANSFER_ENCODING, line.len()) {
            // A later header replaces an earlier one.
            transfer_encodings = TransferEncoding::from_header_value(&line[TRANSFER_ENCODING.len()..]);
        }
        pos += line_end + 1;
    }
}

fn parse_status_code(line: &[u8]) -> Result<i32, ParseError> {
    let space = find_first(line, b' ', line.len()).ok_or(ParseError::MissingStatusCode)?;
    parse_leading_int(&line[space + 1..]).ok_or(ParseError::MissingStatusCode)
}

/// Parses a decimal integer at the start of `text`, after optional leading
/// whitespace and sign. Anything after the digits is ignored.
fn parse_leading_int(text: &[u8]) -> Option<i32> {
    let mut rest = text;
    while let [b' ' | b'\t', tail @ ..] = rest {
        rest = tail;
    }
    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let mut value: i32 = 0;
    for &digit in &rest[..digits] {
        value = value.checked_mul(10)?.checked_add(i32::from(digit - b'0'))?;
    }
    Some(if negative { -value } else { value })
}

fn trim_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}
