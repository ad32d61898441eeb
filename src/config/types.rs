// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub function: FunctionConfig,
    pub routes: RoutesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// Seconds an idle keep-alive connection is kept open (0 disables keep-alive)
    pub keep_alive_timeout: u64,
    /// Seconds allowed to receive the headers of each request
    pub read_timeout: u64,
    /// Seconds to wait for in-flight connections after a shutdown signal
    pub shutdown_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
}

/// Hosted function configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FunctionConfig {
    /// Function name, last segment of the route
    pub name: String,
    /// Path prefix in front of the function name
    pub route_prefix: String,
}

impl FunctionConfig {
    /// Full path the function is served on, e.g. `/api/WatchInfo`
    pub fn route(&self) -> String {
        let prefix = self.route_prefix.trim_end_matches('/');
        let name = self.name.trim_start_matches('/');
        if prefix.is_empty() {
            format!("/{name}")
        } else if prefix.starts_with('/') {
            format!("{prefix}/{name}")
        } else {
            format!("/{prefix}/{name}")
        }
    }
}

/// Routes configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RoutesConfig {
    /// Enable health check endpoints
    #[serde(default = "default_health_enabled")]
    pub health_enabled: bool,
    /// Liveness probe path (default: /healthz)
    #[serde(default = "default_healthz_path")]
    pub liveness_path: String,
    /// Readiness probe path (default: /readyz)
    #[serde(default = "default_readyz_path")]
    pub readiness_path: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_health_enabled() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_healthz_path() -> String {
    "/healthz".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_readyz_path() -> String {
    "/readyz".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            health_enabled: default_health_enabled(),
            liveness_path: default_healthz_path(),
            readiness_path: default_readyz_path(),
        }
    }
}
