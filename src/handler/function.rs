//! WatchInfo function endpoint
//!
//! Bridges a hyper request to the pure `watch::handle` and records the
//! access log entry for the invocation.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::net::SocketAddr;
use std::time::Instant;

use crate::config::AppState;
use crate::http::{self, QueryParams};
use crate::logger::{self, AccessLogEntry};
use crate::watch;

/// Serve one WatchInfo invocation
pub fn serve<B>(req: &Request<B>, state: &AppState, peer_addr: SocketAddr) -> Response<Full<Bytes>> {
    let started = Instant::now();
    let query = req.uri().query();
    let params = QueryParams::parse(query);

    let result = watch::handle(&params);
    if !result.is_success() {
        logger::log_debug(&format!(
            "{} rejected: {}",
            state.config.function.name, result.body
        ));
    }

    if state.access_log_enabled() {
        let mut entry = AccessLogEntry::new(
            peer_addr.to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = query.map(ToString::to_string);
        entry.http_version = http_version(req.version()).to_string();
        entry.status = result.status;
        entry.body_bytes = result.body.len();
        entry.user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    http::build_text_response(
        result.status,
        result.body,
        *req.method() == Method::HEAD,
        &state.config.http.server_name,
    )
}

fn http_version(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
