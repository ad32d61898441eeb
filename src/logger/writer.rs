//! Log writer module
//!
//! Provides thread-safe log writing to files or stdout/stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use super::level::LogLevel;

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to file
    File(Mutex<File>),
}

/// Thread-safe log writer
pub struct LogWriter {
    level: LogLevel,
    /// Access log target
    access: LogTarget,
    /// Error log target
    error: LogTarget,
}

impl LogWriter {
    /// Create a new log writer with optional file paths
    fn new(
        level: LogLevel,
        access_log_file: Option<&str>,
        error_log_file: Option<&str>,
    ) -> io::Result<Self> {
        let access = match access_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stdout,
        };

        let error = match error_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stderr,
        };

        Ok(Self {
            level,
            access,
            error,
        })
    }

    /// Write to access log
    pub fn write_access(&self, message: &str) {
        if self.level.allows(LogLevel::Info) {
            write_to_target(&self.access, message);
        }
    }

    /// Write to error log if `severity` passes the configured level
    pub fn write_error(&self, severity: LogLevel, message: &str) {
        if self.level.allows(severity) {
            write_to_target(&self.error, message);
        }
    }

    /// Write info message (to access log target)
    pub fn write_info(&self, message: &str) {
        if self.level.allows(LogLevel::Info) {
            write_to_target(&self.access, message);
        }
    }

    /// Write debug message (to access log target)
    pub fn write_debug(&self, message: &str) {
        if self.level.allows(LogLevel::Debug) {
            write_to_target(&self.access, message);
        }
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Write message to log target
fn write_to_target(target: &LogTarget, message: &str) {
    match target {
        LogTarget::Stdout => {
            println!("{message}");
        }
        LogTarget::Stderr => {
            eprintln!("{message}");
        }
        LogTarget::File(file) => {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{message}");
            }
        }
    }
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
/// Returns error if log files cannot be opened.
pub fn init(
    level: LogLevel,
    access_log_file: Option<&str>,
    error_log_file: Option<&str>,
) -> io::Result<()> {
    let writer = LogWriter::new(level, access_log_file, error_log_file)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer, if `init()` has been called
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestLogs {
        dir: std::path::PathBuf,
        writer: LogWriter,
    }

    impl TestLogs {
        fn new(name: &str, level: LogLevel) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "watch-portal-log-{}-{name}",
                std::process::id()
            ));
            let access = dir.join("nested").join("access.log");
            let error = dir.join("error.log");
            let writer = LogWriter::new(level, access.to_str(), error.to_str()).unwrap();
            Self { dir, writer }
        }

        fn access(&self) -> String {
            std::fs::read_to_string(self.dir.join("nested").join("access.log")).unwrap()
        }

        fn error(&self) -> String {
            std::fs::read_to_string(self.dir.join("error.log")).unwrap()
        }

        fn write_all_kinds(&self) {
            self.writer.write_debug("debug line");
            self.writer.write_info("info line");
            self.writer.write_access("access line");
            self.writer.write_error(LogLevel::Warn, "warn line");
            self.writer.write_error(LogLevel::Error, "error line");
        }
    }

    impl Drop for TestLogs {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    #[test]
    fn test_file_target_appends() {
        let logs = TestLogs::new("append", LogLevel::Info);
        logs.writer.write_access("first");
        logs.writer.write_info("second");
        assert_eq!(logs.access(), "first\nsecond\n");
    }

    #[test]
    fn test_error_level_suppresses_info_and_access() {
        let logs = TestLogs::new("error", LogLevel::Error);
        logs.write_all_kinds();
        assert_eq!(logs.access(), "");
        assert_eq!(logs.error(), "error line\n");
    }

    #[test]
    fn test_warn_level_suppresses_info() {
        let logs = TestLogs::new("warn", LogLevel::Warn);
        logs.write_all_kinds();
        assert_eq!(logs.access(), "");
        assert_eq!(logs.error(), "warn line\nerror line\n");
    }

    #[test]
    fn test_info_level_skips_debug() {
        let logs = TestLogs::new("info", LogLevel::Info);
        logs.write_all_kinds();
        assert_eq!(logs.access(), "info line\naccess line\n");
        assert_eq!(logs.error(), "warn line\nerror line\n");
    }

    #[test]
    fn test_debug_level_writes_everything() {
        let logs = TestLogs::new("debug", LogLevel::Debug);
        logs.write_all_kinds();
        assert_eq!(logs.access(), "debug line\ninfo line\naccess line\n");
        assert_eq!(logs.error(), "warn line\nerror line\n");
    }
}
