use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;
mod watch;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Worker count falls back to the number of CPU cores
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state = Arc::new(config::AppState::new(&cfg));
    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals))?;

    logger::log_server_start(&addr, &cfg, &state.function_route);

    server::start_server_loop(listener, state, signals).await;
    Ok(())
}
