use std::fmt;

use crate::http::request::{Method, Request};

/// Longest request target accepted, in bytes.
pub const MAX_TARGET_LEN: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No method token at all
    Empty,
    /// GET or HEAD without a target
    MissingTarget,
    TargetTooLong(usize),
    InvalidTarget,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty request"),
            ParseError::MissingTarget => write!(f, "request line has no target"),
            ParseError::TargetTooLong(len) => {
                write!(f, "target is {} bytes, limit is {}", len, MAX_TARGET_LEN)
            }
            ParseError::InvalidTarget => write!(f, "target is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Returns true once `buf` holds a complete request line.
pub fn has_request_line(buf: &[u8]) -> bool {
    buf.contains(&b'\n')
}

/// Parses the request line at the start of `buf`.
///
/// Only the first line is consulted and only its first two whitespace
/// separated tokens. An unknown method is not an error: it parses to
/// `Method::OTHER` so the caller can answer 501 without looking at the
/// target.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let line = match buf.iter().position(|&b| b == b'\n') {
        Some(end) => &buf[..end],
        None => buf,
    };

    let mut parts = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty());

    let method = Method::from_token(parts.next().ok_or(ParseError::Empty)?);
    let target = parts.next();

    if !method.is_supported() {
        let target = target
            .map(|t| String::from_utf8_lossy(t).into_owned())
            .unwrap_or_default();
        return Ok(Request::new(method, target));
    }

    let target = target.ok_or(ParseError::MissingTarget)?;
    if target.len() > MAX_TARGET_LEN {
        return Err(ParseError::TargetTooLong(target.len()));
    }
    let target = std::str::from_utf8(target).map_err(|_| ParseError::InvalidTarget)?;

    Ok(Request::new(method, target))
}
