// Connection handling module
// Accepts a single TCP connection and serves it over HTTP/1.1

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::Notify;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept and process a connection, checking limits and logging.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
pub fn accept_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    // Increment counter first, then check limit
    let prev_count = state.acquire_connection();

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            // Exceeded limit: rollback counter and reject
            state.release_connection();
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection rejected."
            ));
            drop(stream);
            return;
        }
    }

    logger::log_connection_accepted(&peer_addr);

    let state = Arc::clone(state);
    tokio::spawn(async move {
        serve_connection(stream, peer_addr, &state).await;
        state.release_connection();
    });
}

/// Serve one connection until the client closes it or it goes idle.
///
/// `performance.read_timeout` bounds the header read of every request.
/// `performance.keep_alive_timeout` is an idle timer, restarted whenever a
/// request reaches the handler; when it fires the connection is shut down
/// gracefully, so a request already being served still completes.
async fn serve_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    let performance = &state.config.performance;
    let keep_alive = Duration::from_secs(performance.keep_alive_timeout);

    let mut builder = http1::Builder::new();
    builder
        .timer(TokioTimer::new())
        .header_read_timeout(Duration::from_secs(performance.read_timeout))
        .keep_alive(!keep_alive.is_zero());

    let activity = Arc::new(Notify::new());
    let service_activity = Arc::clone(&activity);
    let service_state = Arc::clone(state);
    let conn = builder.serve_connection(
        TokioIo::new(stream),
        service_fn(move |req| {
            service_activity.notify_one();
            handler::handle_request(req, Arc::clone(&service_state), peer_addr)
        }),
    );
    tokio::pin!(conn);

    let idle = tokio::time::sleep(keep_alive);
    tokio::pin!(idle);
    let mut closing = false;

    let result = loop {
        tokio::select! {
            res = conn.as_mut() => break res,

            () = activity.notified() => {
                idle.as_mut().reset(tokio::time::Instant::now() + keep_alive);
            }

            () = &mut idle, if !closing && !keep_alive.is_zero() => {
                conn.as_mut().graceful_shutdown();
                closing = true;
            }
        }
    };

    match result {
        Ok(()) => {}
        Err(err) if err.is_timeout() => {
            logger::log_warning(&format!(
                "Connection from {peer_addr} timed out reading request headers after {} seconds",
                performance.read_timeout
            ));
        }
        Err(err) => logger::log_connection_error(&err),
    }
}
