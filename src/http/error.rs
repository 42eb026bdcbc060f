use std::fmt;

use crate::http::parser::ParseError;
use crate::http::response::{Response, StatusCode};

/// Everything that can end a connection without a 200.
///
/// Each variant maps to exactly one status code. None of them outlives the
/// connection that produced it.
#[derive(Debug)]
pub enum ServeError {
    MalformedRequest(ParseError),
    NotFound(std::io::Error),
    Unimplemented,
    InternalFault(Fault),
}

/// Server-side faults, all answered with 500.
#[derive(Debug)]
pub enum Fault {
    Read(std::io::Error),
    Open(std::io::Error),
    Alloc(u64),
    ShortRead { expected: u64, actual: u64 },
}

impl ServeError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServeError::MalformedRequest(_) => StatusCode::BadRequest,
            ServeError::NotFound(_) => StatusCode::NotFound,
            ServeError::Unimplemented => StatusCode::NotImplemented,
            ServeError::InternalFault(_) => StatusCode::InternalServerError,
        }
    }

    pub fn to_response(&self) -> Response {
        match self {
            ServeError::NotFound(_) => Response::not_found(),
            ServeError::InternalFault(_) => Response::internal_error(),
            _ => Response::error(self.status()),
        }
    }
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeError::MalformedRequest(e) => write!(f, "malformed request: {}", e),
            ServeError::NotFound(e) => write!(f, "not found: {}", e),
            ServeError::Unimplemented => write!(f, "method not implemented"),
            ServeError::InternalFault(e) => write!(f, "internal fault: {}", e),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Read(e) => write!(f, "read failed: {}", e),
            Fault::Open(e) => write!(f, "open failed after stat: {}", e),
            Fault::Alloc(size) => write!(f, "could not allocate {} bytes", size),
            Fault::ShortRead { expected, actual } => {
                write!(f, "short read: expected {} bytes, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for ServeError {}

impl From<ParseError> for ServeError {
    fn from(e: ParseError) -> Self {
        ServeError::MalformedRequest(e)
    }
}

impl From<Fault> for ServeError {
    fn from(e: Fault) -> Self {
        ServeError::InternalFault(e)
    }
}
