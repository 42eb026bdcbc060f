/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): File served
/// - `BadRequest` (400): Malformed request line
/// - `NotFound` (404): Nothing servable at the resolved path
/// - `InternalServerError` (500): Server-side fault
/// - `NotImplemented` (501): Method other than GET or HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

const BAD_REQUEST_PAGE: &str =
    "<html>\n\t<body>\n\t\t<h1>400 Bad Request</h1>\n\t</body>\n</html>";
const NOT_FOUND_PAGE: &str =
    "<html>\n\t<body>\n\t\t<h1>404 Not Found</h1>\n\t</body>\n</html>";
const INTERNAL_ERROR_PAGE: &str = "<html>\n\t<body>\n\t\t<h1>500 Internal Server Error.</h1>\n\t\tPlease try again\n\t</body>\n</html>";
const NOT_IMPLEMENTED_PAGE: &str =
    "<html>\n\t<body>\n\t\t<h1>501 Not Implemented</h1>\n\t</body>\n</html>";

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }

    /// The fixed HTML page sent with an error status. `None` for 200.
    pub fn error_page(&self) -> Option<&'static str> {
        match self {
            StatusCode::Ok => None,
            StatusCode::BadRequest => Some(BAD_REQUEST_PAGE),
            StatusCode::NotFound => Some(NOT_FOUND_PAGE),
            StatusCode::InternalServerError => Some(INTERNAL_ERROR_PAGE),
            StatusCode::NotImplemented => Some(NOT_IMPLEMENTED_PAGE),
        }
    }
}

/// A complete HTTP response ready to be sent to a client.
///
/// Headers keep their insertion order, with Content-Length always first.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in the order they are written
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "application/json")
///     .body(b"{}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header, replacing an earlier one of the same name in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
            Some(existing) => existing.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Puts a Content-Length matching the body at the front of the headers
    /// unless one was set explicitly.
    pub fn build(mut self) -> Response {
        let has_length = self
            .headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case("Content-Length"));
        if !has_length {
            self.headers
                .insert(0, ("Content-Length".to_string(), self.body.len().to_string()));
        }

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// A 200 response carrying a file's bytes.
    pub fn file(body: Vec<u8>, content_type: Option<&str>) -> Self {
        let len = body.len() as u64;
        Self::file_headers(len, content_type).body(body).build()
    }

    /// A 200 response for HEAD: the headers GET would send, no body.
    pub fn file_head(len: u64, content_type: Option<&str>) -> Self {
        Self::file_headers(len, content_type).build()
    }

    fn file_headers(len: u64, content_type: Option<&str>) -> ResponseBuilder {
        let builder = ResponseBuilder::new(StatusCode::Ok).header("Content-Length", len.to_string());
        match content_type {
            Some(ty) => builder.header("Content-Type", ty),
            None => builder,
        }
    }

    /// The fixed error page for `status`.
    pub fn error(status: StatusCode) -> Self {
        let page = status.error_page().unwrap_or_default();
        ResponseBuilder::new(status)
            .header("Content-Type", "text/html")
            .body(page.as_bytes().to_vec())
            .build()
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::error(StatusCode::NotFound)
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::error(StatusCode::InternalServerError)
    }

    /// Drops the body and keeps every header, Content-Length included.
    pub fn into_head(self) -> Self {
        Self {
            body: Vec::new(),
            ..self
        }
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
