//! HTTP response building module
//!
//! Provides builders for the responses the service sends, decoupled from the
//! WatchInfo function itself.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Methods accepted on the function route
pub const ALLOWED_METHODS: &str = "GET, HEAD, POST, OPTIONS";

/// Build a plain text response with the given status
///
/// For HEAD requests the body is dropped but `Content-Length` still reports
/// the full size.
pub fn build_text_response(
    status: u16,
    content: String,
    is_head: bool,
    server_name: &str,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(status)
        .header("Content-Type", TEXT_PLAIN)
        .header("Content-Length", content_length)
        .header("Server", server_name)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response(server_name: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", TEXT_PLAIN)
        .header("Server", server_name)
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(server_name: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", TEXT_PLAIN)
        .header("Allow", ALLOWED_METHODS)
        .header("Server", server_name)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool, server_name: &str) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", ALLOWED_METHODS)
        .header("Server", server_name);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build health check response (for liveness/readiness probes)
pub fn build_health_response(status: &str, server_name: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", TEXT_PLAIN)
        .header("Cache-Control", "no-cache, no-store")
        .header("Server", server_name)
        .body(Full::new(Bytes::from(status.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(Full::new(Bytes::from("ok")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
