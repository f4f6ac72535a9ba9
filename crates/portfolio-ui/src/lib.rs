//! Portfolio UI Components
//!
//! Presentational Dioxus components for the single-page portfolio. They take
//! plain props (usually a `revealed` flag from the owning section's latch)
//! and hold no state of their own; sections in the desktop shell compose
//! them.
//!
//! ## Palette
//!
//! - **Indigo (#667eea)**: accents, active pills, primary buttons
//! - **Violet (#764ba2)**: gradient partner for hero and stat tiles
//! - **Coral (#ff6b6b)**: "featured" badges
//! - **Ink (#1a1a1a)**: headings and footer background

pub mod components;

pub use components::*;
