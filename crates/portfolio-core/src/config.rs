//! Runtime configuration for timings and reveal threshold.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```json
//! { "effect_lifetime_ms": 1500, "reveal_threshold": 0.25 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// How long a click effect stays in the active set (ms)
pub const DEFAULT_EFFECT_LIFETIME_MS: u64 = 2000;

/// Artificial delay of the simulated contact submission (ms)
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// How long the "message sent" banner stays up (ms)
pub const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 5000;

/// Visible fraction at which a section counts as revealed
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Scroll offset past which the nav bar switches to its solid style (px)
pub const DEFAULT_NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub effect_lifetime_ms: u64,
    pub submit_delay_ms: u64,
    pub success_display_ms: u64,
    pub reveal_threshold: f64,
    pub nav_scroll_threshold: f64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            effect_lifetime_ms: DEFAULT_EFFECT_LIFETIME_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            success_display_ms: DEFAULT_SUCCESS_DISPLAY_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            nav_scroll_threshold: DEFAULT_NAV_SCROLL_THRESHOLD,
        }
    }
}

impl PortfolioConfig {
    /// Parse and validate a JSON config string.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded config");
        Ok(config)
    }

    /// Reject thresholds outside `(0, 1]` and zero durations.
    pub fn validate(&self) -> PortfolioResult<()> {
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(PortfolioError::Config(format!(
                "reveal_threshold must be in (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if self.nav_scroll_threshold < 0.0 {
            return Err(PortfolioError::Config(format!(
                "nav_scroll_threshold must not be negative, got {}",
                self.nav_scroll_threshold
            )));
        }
        for (name, value) in [
            ("effect_lifetime_ms", self.effect_lifetime_ms),
            ("submit_delay_ms", self.submit_delay_ms),
            ("success_display_ms", self.success_display_ms),
        ] {
            if value == 0 {
                return Err(PortfolioError::Config(format!("{} must be non-zero", name)));
            }
        }
        Ok(())
    }

    pub fn effect_lifetime(&self) -> Duration {
        Duration::from_millis(self.effect_lifetime_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_page_timings() {
        let config = PortfolioConfig::default();
        assert_eq!(config.effect_lifetime(), Duration::from_millis(2000));
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
        assert_eq!(config.success_display(), Duration::from_millis(5000));
        assert_eq!(config.reveal_threshold, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = PortfolioConfig::from_json(r#"{ "effect_lifetime_ms": 1500 }"#).unwrap();
        assert_eq!(config.effect_lifetime_ms, 1500);
        assert_eq!(config.submit_delay_ms, DEFAULT_SUBMIT_DELAY_MS);
        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
    }

    #[test]
    fn rejects_bad_threshold() {
        let err = PortfolioConfig::from_json(r#"{ "reveal_threshold": 0.0 }"#).unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));

        let err = PortfolioConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn rejects_zero_duration() {
        let err = PortfolioConfig::from_json(r#"{ "submit_delay_ms": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("submit_delay_ms"));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = PortfolioConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PortfolioError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{ "success_display_ms": 3000 }"#).unwrap();

        let config = PortfolioConfig::load(&path).unwrap();
        assert_eq!(config.success_display(), Duration::from_millis(3000));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = PortfolioConfig::load(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
