use lantern::http::error::{Fault, ServeError};
use lantern::http::parser::ParseError;
use lantern::http::response::{Response, ResponseBuilder, StatusCode};
use lantern::http::writer::{ResponseWriter, serialize_response};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[test]
fn test_response_builder_auto_content_length_comes_first() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body(b"This is the body".to_vec())
        .build();

    assert_eq!(response.headers[0], ("Content-Length".to_string(), "16".to_string()));
    assert_eq!(response.headers[1], ("Content-Type".to_string(), "text/plain".to_string()));
}

#[test]
fn test_response_builder_replaces_header_in_place() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("content-type", "text/html")
        .build();

    assert_eq!(response.headers.len(), 2);
    assert_eq!(response.header("Content-Type"), Some("text/html"));
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert_eq!(response.body.len(), 0);
    assert_eq!(response.header("Content-Length"), Some("0"));
}

#[test]
fn test_file_response_with_type() {
    let response = Response::file(b"{}".to_vec(), Some("application/json"));

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Length"), Some("2"));
    assert_eq!(response.header("Content-Type"), Some("application/json"));
    assert_eq!(response.body, b"{}".to_vec());
}

#[test]
fn test_file_response_without_type() {
    let response = Response::file(b"raw".to_vec(), None);

    assert_eq!(response.headers.len(), 1);
    assert_eq!(response.header("Content-Type"), None);
}

#[test]
fn test_file_head_matches_get_headers() {
    let get = Response::file(vec![7u8; 1234], Some("image/png"));
    let head = Response::file_head(1234, Some("image/png"));

    assert_eq!(get.headers, head.headers);
    assert!(head.body.is_empty());
}

#[test]
fn test_error_pages() {
    let cases = [
        (StatusCode::BadRequest, "<h1>400 Bad Request</h1>"),
        (StatusCode::NotFound, "<h1>404 Not Found</h1>"),
        (StatusCode::InternalServerError, "<h1>500 Internal Server Error.</h1>"),
        (StatusCode::NotImplemented, "<h1>501 Not Implemented</h1>"),
    ];

    for (status, heading) in cases {
        let response = Response::error(status);
        let body = String::from_utf8(response.body.clone()).unwrap();

        assert_eq!(response.status, status);
        assert!(body.contains(heading), "{:?} page missing heading", status);
        assert_eq!(response.header("Content-Type"), Some("text/html"));
        assert_eq!(
            response.header("Content-Length"),
            Some(response.body.len().to_string().as_str())
        );
    }
}

#[test]
fn test_not_found_body_is_literal() {
    let response = Response::not_found();
    assert_eq!(
        response.body,
        b"<html>\n\t<body>\n\t\t<h1>404 Not Found</h1>\n\t</body>\n</html>".to_vec()
    );
}

#[test]
fn test_into_head_keeps_content_length() {
    let response = Response::internal_error();
    let declared = response.header("Content-Length").unwrap().to_string();
    let head = response.into_head();

    assert!(head.body.is_empty());
    assert_eq!(head.header("Content-Length"), Some(declared.as_str()));
}

#[test]
fn test_serve_error_responses() {
    let cases = [
        (ServeError::MalformedRequest(ParseError::Empty), StatusCode::BadRequest),
        (ServeError::NotFound(std::io::Error::other("gone")), StatusCode::NotFound),
        (ServeError::Unimplemented, StatusCode::NotImplemented),
        (ServeError::InternalFault(Fault::Alloc(1 << 40)), StatusCode::InternalServerError),
    ];

    for (err, status) in cases {
        let response = err.to_response();
        let expected = Response::error(status);

        assert_eq!(response.status, status);
        assert_eq!(response.headers, expected.headers);
        assert_eq!(response.body, expected.body);
    }
}

#[test]
fn test_serialize_ok_response() {
    let response = Response::file(b"hello".to_vec(), Some("text/plain"));
    let bytes = serialize_response(&response);

    assert_eq!(
        bytes,
        b"HTTP/1.0 200 OK\r\nContent-Length: 5\r\nContent-Type: text/plain\r\n\r\nhello".to_vec()
    );
}

#[test]
fn test_serialize_without_content_type() {
    let response = Response::file(b"xy".to_vec(), None);
    let bytes = serialize_response(&response);

    assert_eq!(bytes, b"HTTP/1.0 200 OK\r\nContent-Length: 2\r\n\r\nxy".to_vec());
}

#[test]
fn test_serialize_status_line_for_errors() {
    let bytes = serialize_response(&Response::error(StatusCode::NotImplemented));
    assert!(bytes.starts_with(b"HTTP/1.0 501 Not Implemented\r\n"));
}

#[tokio::test]
async fn test_writer_writes_everything() {
    let response = Response::file(vec![b'z'; 100_000], None);
    let expected = serialize_response(&response).len();
    let mut writer = ResponseWriter::new(&response);

    let mut sink: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut sink).await.unwrap();

    assert_eq!(sink.len(), expected);
    assert!(sink.ends_with(&[b'z'; 10]));
}
