// Configuration module entry point
// Loads layered configuration (defaults, file, environment) and holds runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, RoutesConfig};

/// Config file used when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, lowest priority first: built-in defaults, the optional config
    /// file, then `WATCH_`-prefixed environment variables
    /// (`WATCH_SERVER__PORT=9000`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("WATCH")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 7071)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.shutdown_timeout", 30)?
            .set_default("http.server_name", "watch-portal/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("function.name", "WatchInfo")?
            .set_default("function.route_prefix", "/api")?
            .set_default("routes.health_enabled", true)?
            .set_default("routes.liveness_path", "/healthz")?
            .set_default("routes.readiness_path", "/readyz")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
