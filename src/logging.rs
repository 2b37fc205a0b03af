//! Logging configuration
//!
//! The library only emits `tracing` events and never installs a global
//! subscriber. Callers either install their own, or build a dispatcher here
//! and hand it to [`ClientConfig::log_dispatch`](crate::ClientConfig::log_dispatch).

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV: &str = "ZERION_LOG";
/// Environment variable holding the optional log file path.
pub const LOG_FILE_ENV: &str = "ZERION_LOG_FILE";

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `info` or `zerion_sdk=debug`.
    pub filter: String,

    /// Append plain-text logs to this file.
    pub file: Option<PathBuf>,

    /// Also log to stderr.
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
            stderr: true,
        }
    }
}

impl LogConfig {
    /// Reads the filter from `ZERION_LOG` (falling back to `RUST_LOG`) and the
    /// log file from `ZERION_LOG_FILE`.
    pub fn from_env() -> Self {
        let filter = std::env::var(LOG_FILTER_ENV)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let file = std::env::var(LOG_FILE_ENV).ok().map(PathBuf::from);

        Self {
            filter,
            file,
            ..Default::default()
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_stderr(mut self, enable: bool) -> Self {
        self.stderr = enable;
        self
    }
}

/// Builds a dispatcher from the configuration without installing it.
///
/// Fails only if the log file cannot be opened.
pub fn build_dispatch(config: &LogConfig) -> io::Result<Dispatch> {
    let env_filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_target(true)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    let stderr_layer = config
        .stderr
        .then(|| fmt::layer().with_writer(io::stderr).with_target(true));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer);

    Ok(Dispatch::new(subscriber))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.filter, "info");
        assert!(config.file.is_none());
        assert!(config.stderr);
    }

    #[test]
    fn test_dispatch_writes_to_file() {
        let path = std::env::temp_dir().join(format!(
            "zerion-sdk-log-{}-{}.log",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let config = LogConfig {
            filter: "debug".to_string(),
            file: Some(path.clone()),
            stderr: false,
        };

        let dispatch = build_dispatch(&config).unwrap();
        tracing::dispatcher::with_default(&dispatch, || {
            tracing::info!("token request failed");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("token request failed"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        let config = LogConfig {
            filter: "not[a=valid".to_string(),
            file: None,
            stderr: false,
        };
        assert!(build_dispatch(&config).is_ok());
    }
}
