use std::fmt;

/// HTTP request methods.
///
/// Only GET and HEAD are served. Every other token, including lowercase
/// spellings of the two, collapses into `OTHER` and is answered with
/// 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// Anything else
    OTHER,
}

impl Method {
    /// Parses a method token.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::request::Method;
    /// assert_eq!(Method::from_token(b"GET"), Method::GET);
    /// assert_eq!(Method::from_token(b"get"), Method::OTHER);
    /// ```
    pub fn from_token(token: &[u8]) -> Self {
        match token {
            b"GET" => Method::GET,
            b"HEAD" => Method::HEAD,
            _ => Method::OTHER,
        }
    }

    /// Returns true for methods this server knows how to serve.
    pub fn is_supported(&self) -> bool {
        matches!(self, Method::GET | Method::HEAD)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::GET => write!(f, "GET"),
            Method::HEAD => write!(f, "HEAD"),
            Method::OTHER => write!(f, "OTHER"),
        }
    }
}

/// A parsed request line.
///
/// Nothing past the first two tokens of the first line is kept: the
/// version, headers and any body are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request method
    pub method: Method,
    /// The raw request target (e.g. "/index.html"), untrusted.
    /// Empty only when the method is `OTHER` and no target was sent.
    pub target: String,
}

impl Request {
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
        }
    }

    pub fn is_head(&self) -> bool {
        self.method == Method::HEAD
    }
}
