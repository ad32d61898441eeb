//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method validation,
//! route matching, and dispatching to the WatchInfo function.

use crate::config::{AppState, RoutesConfig};
use crate::handler::function;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// The request body is never read; the function only consumes the query
/// string, so any body type is accepted.
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let server_name = state.config.http.server_name.as_str();

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(req.method(), state.config.http.enable_cors, server_name)
    {
        return Ok(resp);
    }

    // 2. Health check endpoints
    let path = req.uri().path();
    if let Some(resp) = check_health(path, &state.config.routes, server_name) {
        return Ok(resp);
    }

    // 3. Function route
    if is_function_route(path, &state.function_route) {
        return Ok(function::serve(&req, &state, peer_addr));
    }

    logger::log_warning(&format!("No route for {} {path}", req.method()));
    Ok(http::build_404_response(server_name))
}

/// Check HTTP method and return appropriate response for unsupported methods
fn check_http_method(
    method: &Method,
    enable_cors: bool,
    server_name: &str,
) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD | Method::POST => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors, server_name)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response(server_name))
        }
    }
}

fn check_health(
    path: &str,
    routes: &RoutesConfig,
    server_name: &str,
) -> Option<Response<Full<Bytes>>> {
    if !routes.health_enabled {
        return None;
    }
    if path == routes.liveness_path || path == routes.readiness_path {
        return Some(http::build_health_response("ok", server_name));
    }
    None
}

/// Function hosts match the route case-insensitively and ignore one trailing slash
fn is_function_route(path: &str, route: &str) -> bool {
    let path = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    path.eq_ignore_ascii_case(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;

    fn test_state() -> Arc<AppState> {
        let mut cfg = Config::load_from("does/not/exist/watch-portal").unwrap();
        cfg.logging.access_log = false;
        Arc::new(AppState::new(&cfg))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    async fn call(method: Method, uri: &str) -> (u16, String) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Full::new(Bytes::new()))
            .unwrap();
        let resp = handle_request(req, test_state(), peer()).await.unwrap();
        let status = resp.status().as_u16();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_watch_info_success() {
        let (status, body) = call(Method::GET, "/api/WatchInfo?model=abc").await;
        assert_eq!(status, 200);
        assert_eq!(body, "Watch Details: abc, Solid, Titanium, Roman, Silver, 15");
    }

    #[tokio::test]
    async fn test_watch_info_no_query_string() {
        let (status, body) = call(Method::GET, "/api/WatchInfo").await;
        assert_eq!(status, 400);
        assert_eq!(body, "Please provide a watch model in the query string");
    }

    #[tokio::test]
    async fn test_watch_info_no_model() {
        let (status, body) = call(Method::GET, "/api/WatchInfo?not-model=abc").await;
        assert_eq!(status, 400);
        assert_eq!(body, "Please provide a watch model in the query string");
    }

    #[tokio::test]
    async fn test_watch_info_decodes_model() {
        let (status, body) = call(Method::GET, "/api/WatchInfo?model=Sea%20Master").await;
        assert_eq!(status, 200);
        assert_eq!(body, "Watch Details: Sea Master, Solid, Titanium, Roman, Silver, 15");
    }

    #[tokio::test]
    async fn test_route_is_case_insensitive() {
        let (status, _) = call(Method::GET, "/api/watchinfo/?model=abc").await;
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn test_post_is_accepted() {
        let (status, _) = call(Method::POST, "/api/WatchInfo?model=abc").await;
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn test_head_has_no_body() {
        let req = Request::builder()
            .method(Method::HEAD)
            .uri("/api/WatchInfo?model=abc")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let resp = handle_request(req, test_state(), peer()).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "54");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let (status, _) = call(Method::DELETE, "/api/WatchInfo?model=abc").await;
        assert_eq!(status, 405);
    }

    #[tokio::test]
    async fn test_options() {
        let (status, body) = call(Method::OPTIONS, "/api/WatchInfo").await;
        assert_eq!(status, 204);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_health_probes() {
        assert_eq!(call(Method::GET, "/healthz").await, (200, "ok".to_string()));
        assert_eq!(call(Method::GET, "/readyz").await, (200, "ok".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let (status, body) = call(Method::GET, "/api/Other?model=abc").await;
        assert_eq!(status, 404);
        assert_eq!(body, "404 Not Found");
    }

    #[test]
    fn test_is_function_route() {
        assert!(is_function_route("/api/WatchInfo", "/api/WatchInfo"));
        assert!(is_function_route("/API/WATCHINFO/", "/api/WatchInfo"));
        assert!(!is_function_route("/api/WatchInfo/x", "/api/WatchInfo"));
        assert!(!is_function_route("/", "/api/WatchInfo"));
    }
}
