//! Logger module
//!
//! Provides logging utilities for the service including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
mod level;
pub mod writer;

pub use format::AccessLogEntry;
pub use level::LogLevel;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    let level = config.logging.level.parse().unwrap_or_else(|e: String| {
        eprintln!("[WARN] {e}, falling back to 'info'");
        LogLevel::Info
    });
    writer::init(
        level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Level used before `init()` has been called
const FALLBACK_LEVEL: LogLevel = LogLevel::Info;

/// Write to info log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None if FALLBACK_LEVEL.allows(LogLevel::Info) => println!("{message}"),
        None => {}
    }
}

/// Write to debug log
fn write_debug(message: &str) {
    match writer::get() {
        Some(w) => w.write_debug(message),
        None if FALLBACK_LEVEL.allows(LogLevel::Debug) => println!("{message}"),
        None => {}
    }
}

/// Write to error log
fn write_error(severity: LogLevel, message: &str) {
    match writer::get() {
        Some(w) => w.write_error(severity, message),
        None if FALLBACK_LEVEL.allows(severity) => eprintln!("{message}"),
        None => {}
    }
}

/// Write to access log
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None if FALLBACK_LEVEL.allows(LogLevel::Info) => println!("{message}"),
        None => {}
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, function_route: &str) {
    write_info("======================================");
    write_info("Watch portal started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Function: {} -> http://{addr}{function_route}",
        config.function.name
    ));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_shutdown(active_connections: usize) {
    write_info(&format!(
        "[Shutdown] Listener closed, draining {active_connections} connection(s)"
    ));
}

pub fn log_drain_complete(remaining: usize) {
    if remaining == 0 {
        write_info("[Shutdown] All connections finished");
    } else {
        log_warning(&format!(
            "[Shutdown] Drain timed out, dropping {remaining} connection(s)"
        ));
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_debug(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(
        LogLevel::Error,
        &format!("[ERROR] Failed to serve connection: {err:?}"),
    );
}

pub fn log_error(message: &str) {
    write_error(LogLevel::Error, &format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(LogLevel::Warn, &format!("[WARN] {message}"));
}

pub fn log_debug(message: &str) {
    write_debug(&format!("[DEBUG] {message}"));
}

pub fn log_info(message: &str) {
    write_info(&format!("[INFO] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}
