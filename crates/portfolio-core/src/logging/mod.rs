//! Logging setup.
//!
//! Console output always goes through `tracing_subscriber::fmt` filtered by
//! `RUST_LOG` (default `info`). With a logs directory, every event is also
//! appended to `<logs_dir>/<date>_<session>.jsonl`:
//!
//! ```bash
//! # Every reveal that fired this session
//! jq 'select(.msg == "Section revealed")' logs/*_main.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

use std::path::PathBuf;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub use entry::JsonLogEntry;
pub use layer::JsonlLayer;
pub use writer::{read_entries, SessionLogWriter};

const DEFAULT_FILTER: &str = "info";

/// Builder for the global tracing subscriber.
pub struct LoggingBuilder {
    session: String,
    logs_dir: Option<PathBuf>,
    env_filter: Option<String>,
}

impl LoggingBuilder {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            logs_dir: None,
            env_filter: None,
        }
    }

    /// Also write JSONL to this directory.
    pub fn with_logs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = Some(dir.into());
        self
    }

    /// Filter used when `RUST_LOG` is unset, e.g. `"portfolio=debug"`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Directive used when `RUST_LOG` is unset.
    pub fn fallback_filter(&self) -> &str {
        self.env_filter.as_deref().unwrap_or(DEFAULT_FILTER)
    }

    /// Build the JSONL layer on its own, if a logs directory is set.
    pub fn build_layer(&self) -> std::io::Result<Option<JsonlLayer>> {
        self.logs_dir
            .as_ref()
            .map(|dir| JsonlLayer::new(dir, self.session.clone()))
            .transpose()
    }

    /// Install as the global default subscriber.
    ///
    /// Returns the JSONL path when file logging is on.
    pub fn init(self) -> std::io::Result<Option<PathBuf>> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.fallback_filter()));

        let jsonl = self.build_layer()?;
        let path = jsonl.as_ref().map(|l| l.log_path().to_path_buf());

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .with(jsonl)
            .try_init()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fallback_filter_defaults_to_info() {
        assert_eq!(LoggingBuilder::new("main").fallback_filter(), "info");
        let builder = LoggingBuilder::new("main").with_filter("portfolio_core=debug");
        assert_eq!(builder.fallback_filter(), "portfolio_core=debug");
    }

    #[test]
    fn no_dir_means_no_layer() {
        let builder = LoggingBuilder::new("test");
        assert!(builder.build_layer().unwrap().is_none());
    }

    #[test]
    fn dir_builds_layer() {
        let temp = TempDir::new().unwrap();
        let layer = LoggingBuilder::new("test")
            .with_logs_dir(temp.path())
            .build_layer()
            .unwrap()
            .unwrap();
        assert!(layer.log_path().starts_with(temp.path()));
    }
}
