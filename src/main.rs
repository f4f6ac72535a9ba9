#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::logging::LoggingBuilder;
use portfolio_core::PortfolioConfig;

/// Global config, set once from the command line before launch
static CONFIG: OnceLock<PortfolioConfig> = OnceLock::new();

/// Get the loaded config (defaults if launch did not set one)
pub fn get_config() -> PortfolioConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Default config location: `<data dir>/portfolio/config.json`
fn default_config_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
        .join("config.json")
}

/// Bilal Mahmood - Portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Single-page developer portfolio")]
struct Args {
    /// JSON config file (timings and thresholds)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write JSONL logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset, e.g. "portfolio_core=debug"
    #[arg(long)]
    log_filter: Option<String>,

    /// Session name used in the JSONL file name
    #[arg(short, long, default_value = "main")]
    session: String,

    /// Window width (logical px)
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height (logical px)
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// Load the explicit config, or the default one if present.
///
/// A bad explicit path is an error; a bad default file falls back to defaults.
fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<PortfolioConfig> {
    if let Some(path) = explicit {
        return PortfolioConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }

    let path = default_config_path();
    if !path.exists() {
        return Ok(PortfolioConfig::default());
    }
    match PortfolioConfig::load(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Ignoring invalid config");
            Ok(PortfolioConfig::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new(args.session.clone());
    if let Some(dir) = &args.log_dir {
        logging = logging.with_logs_dir(dir);
    }
    if let Some(filter) = &args.log_filter {
        logging = logging.with_filter(filter.clone());
    }
    if let Some(path) = logging.init().context("failed to initialise logging")? {
        tracing::info!("Writing JSONL logs to {:?}", path);
    }

    let config = load_config(args.config.as_ref())?;
    tracing::info!(
        effect_lifetime_ms = config.effect_lifetime_ms,
        reveal_threshold = config.reveal_threshold,
        "Starting portfolio"
    );
    let _ = CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Bilal Mahmood - Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_flag_reaches_builder() {
        let args = Args::try_parse_from([
            "portfolio-desktop",
            "--log-filter",
            "portfolio_core=debug",
        ])
        .unwrap();
        assert_eq!(args.log_filter.as_deref(), Some("portfolio_core=debug"));

        let args = Args::try_parse_from(["portfolio-desktop"]).unwrap();
        assert!(args.log_filter.is_none());
        assert_eq!(args.session, "main");
    }
}
