//! App-wide context for the portfolio shell.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_config();
//! let effects = use_effects();
//! scroll_to(Section::About);
//! ```

use dioxus::prelude::*;
use portfolio_core::{EffectLayer, PortfolioConfig, Section};

/// Get the config loaded at launch.
pub fn get_config() -> PortfolioConfig {
    crate::get_config()
}

/// Hook to access the config provided by `App`.
pub fn use_config() -> PortfolioConfig {
    use_context::<PortfolioConfig>()
}

/// Hook to access the shared click-effect layer.
pub fn use_effects() -> EffectLayer {
    use_context::<EffectLayer>()
}

/// Smooth-scroll the window to a section root.
pub fn scroll_to(section: Section) {
    scroll_to_id(section.id());
}

/// Smooth-scroll the window to any element id. Missing ids are ignored.
pub fn scroll_to_id(id: &str) {
    tracing::debug!(target_id = id, "Scrolling");
    // Fire and forget: the script sends nothing back
    dioxus::document::eval(&format!(
        r#"document.getElementById("{id}")?.scrollIntoView({{ behavior: "smooth" }});"#
    ));
}
