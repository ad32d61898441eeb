// Server loop module
// Accepts connections until a shutdown signal arrives, then drains in-flight ones

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::signal::SignalHandler;
use crate::config::AppState;
use crate::logger;

/// Accept connections until `signals.shutdown` is notified.
///
/// After the listener is closed, waits for in-flight connections to finish,
/// for at most `performance.shutdown_timeout` seconds.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    signals: Arc<SignalHandler>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = signals.shutdown.notified() => {
                break;
            }
        }
    }

    drop(listener);
    logger::log_shutdown(state.connection_count());

    let timeout = Duration::from_secs(state.config.performance.shutdown_timeout);
    let remaining = drain_connections(&state, timeout).await;
    logger::log_drain_complete(remaining);
}

/// Wait until no connection is active or `timeout` elapses.
///
/// Returns the number of connections still active when it gives up.
async fn drain_connections(state: &AppState, timeout: Duration) -> usize {
    let drain_deadline = tokio::time::Instant::now() + timeout;

    loop {
        let active = state.connection_count();
        if active == 0 {
            return 0;
        }

        tokio::select! {
            () = state.connections_drained.notified() => {}

            () = tokio::time::sleep_until(drain_deadline) => {
                return state.connection_count();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_reusable_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn test_state(shutdown_timeout: u64) -> Arc<AppState> {
        let mut cfg = Config::load_from("does/not/exist/watch-portal").unwrap();
        cfg.logging.access_log = false;
        cfg.performance.shutdown_timeout = shutdown_timeout;
        Arc::new(AppState::new(&cfg))
    }

    async fn wait_for_connections(state: &AppState, expected: usize) {
        for _ in 0..500 {
            if state.connection_count() == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {expected} active connection(s)");
    }

    #[tokio::test]
    async fn test_shutdown_finishes_in_flight_request() {
        let state = test_state(10);
        let signals = Arc::new(SignalHandler::new());
        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(start_server_loop(
            listener,
            Arc::clone(&state),
            Arc::clone(&signals),
        ));

        let mut client = TcpStream::connect(addr).await.unwrap();
        client
            .write_all(b"GET /api/WatchInfo?model=abc HTTP/1.1\r\n")
            .await
            .unwrap();
        wait_for_connections(&state, 1).await;

        signals.request_shutdown("test");
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!server.is_finished());

        client
            .write_all(b"Host: x\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();

        // The loop only returns once the connection has been served
        tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(state.connection_count(), 0);

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).await.unwrap();
        let response = String::from_utf8(buf).unwrap();
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with("Watch Details: abc, Solid, Titanium, Roman, Silver, 15"));
    }

    #[tokio::test]
    async fn test_drain_gives_up_after_timeout() {
        let state = test_state(0);
        state.acquire_connection();

        let remaining = drain_connections(&state, Duration::from_millis(50)).await;
        assert_eq!(remaining, 1);
    }

    #[tokio::test]
    async fn test_drain_returns_when_idle() {
        let state = test_state(0);
        assert_eq!(drain_connections(&state, Duration::from_secs(5)).await, 0);
    }
}
