//! Theme: the global stylesheet.
//!
//! Palette: indigo `#667eea`, violet `#764ba2`, coral `#ff6b6b`, ink `#1a1a1a`.

mod styles;

pub use styles::GLOBAL_STYLES;
