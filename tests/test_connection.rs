//! Tests for the per-connection error boundary

use mini_http::http::connection::process;
use mini_http::http::mime::MediaType;
use mini_http::http::request::Request;
use mini_http::http::response::Response;
use mini_http::http::writer::serialize_response;

fn echo_uri(req: &Request) -> anyhow::Result<Response> {
    Ok(Response::ok(
        MediaType::TEXT_PLAIN,
        format!("You requested URI {:?}", req.uri()),
    ))
}

fn always_fails(_req: &Request) -> anyhow::Result<Response> {
    anyhow::bail!("backend exploded")
}

#[test]
fn test_valid_request_reaches_handler() {
    let response = process(&echo_uri, b"GET /hello/world HTTP/1.1\r\n");
    let expected = Response::new(
        200,
        Some(("text", "plain")),
        Some(r#"You requested URI ["hello", "world"]"#),
    )
    .unwrap();

    assert_eq!(response, serialize_response(&expected));
}

#[test]
fn test_segment_count_of_root() {
    let handler = |req: &Request| -> anyhow::Result<Response> {
        Ok(Response::ok(MediaType::TEXT_PLAIN, req.uri().len().to_string()))
    };
    let response = process(&handler, b"GET / HTTP/1.1\r\n");

    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 1\r\n\r\n1"
    );
}

#[test]
fn test_malformed_request_is_bad_request() {
    for input in [
        &b"POST / HTTP/1.1\r\n"[..],
        b"GET / HTTP/1.0\r\n",
        b"GET  / HTTP/1.1\r\n",
        b"Hello, there!",
        b"",
    ] {
        assert_eq!(process(&echo_uri, input), b"HTTP/1.1 400 Bad Request\r\n\r\n");
    }
}

#[test]
fn test_malformed_request_never_calls_handler() {
    let called = std::cell::Cell::new(false);
    let handler = |_req: &Request| -> anyhow::Result<Response> {
        called.set(true);
        Ok(Response::not_found())
    };

    process(&handler, b"GET foo HTTP/1.1\r\n");
    assert!(!called.get());

    process(&handler, b"GET /foo HTTP/1.1\r\n");
    assert!(called.get());
}

#[test]
fn test_handler_error_is_internal_error() {
    let response = process(&always_fails, b"GET / HTTP/1.1\r\n");
    assert_eq!(response, b"HTTP/1.1 500 Internal Server Error\r\n\r\n");
}

#[test]
fn test_handler_panic_is_internal_error() {
    let handler = |req: &Request| -> anyhow::Result<Response> {
        let index: usize = req.uri()[0].parse()?;
        let items = ["a", "b"];
        Ok(Response::ok(MediaType::TEXT_PLAIN, items[index]))
    };

    assert_eq!(
        process(&handler, b"GET /1 HTTP/1.1\r\n"),
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 1\r\n\r\nb"
    );
    // Out-of-bounds index panics inside the handler.
    assert_eq!(
        process(&handler, b"GET /7 HTTP/1.1\r\n"),
        b"HTTP/1.1 500 Internal Server Error\r\n\r\n"
    );
    // A non-numeric segment is an ordinary error.
    assert_eq!(
        process(&handler, b"GET /x HTTP/1.1\r\n"),
        b"HTTP/1.1 500 Internal Server Error\r\n\r\n"
    );
}

#[test]
fn test_handler_not_found_passes_through() {
    let handler = |_req: &Request| -> anyhow::Result<Response> { Ok(Response::not_found()) };
    assert_eq!(
        process(&handler, b"GET /missing HTTP/1.1\r\n"),
        b"HTTP/1.1 404 Not Found\r\n\r\n"
    );
}
