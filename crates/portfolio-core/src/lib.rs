//! Portfolio Core Library
//!
//! Interaction logic for the single-page portfolio, free of any renderer so
//! it can be exercised directly in tests.
//!
//! ## Overview
//!
//! - **Click effects** ([`effects`]): every click or touch anywhere on the
//!   page spawns a ghost that floats up, fades and is removed after a fixed
//!   lifetime.
//! - **Reveal latch** ([`reveal`]): each section animates in the first time
//!   enough of it is visible, exactly once.
//! - **Local section state**: gallery category filter ([`gallery`]),
//!   experience "show more" ([`timeline`]), contact form ([`contact`]) and
//!   nav bar ([`nav`]).
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{Activation, EffectLayer, Point, ThreadRandom};
//! use std::time::Duration;
//!
//! let layer = EffectLayer::new(ThreadRandom, Duration::from_millis(2000));
//! layer.activate(&Activation::Mouse(Point::new(120.0, 80.0)));
//! assert_eq!(layer.len(), 1);
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod effects;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod motion;
pub mod nav;
pub mod random;
pub mod reveal;
pub mod timeline;

// Re-exports
pub use config::PortfolioConfig;
pub use contact::{
    run_submission, ContactError, ContactForm, Field, FormHandle, Phase, SimulatedSubmitter,
    Submission, Submitter,
};
pub use effects::{Activation, Effect, EffectId, EffectLayer, EffectManager, Point};
pub use error::{PortfolioError, PortfolioResult};
pub use gallery::{filter_projects, Category, Gallery};
pub use motion::{Entrance, Offset};
pub use nav::{NavState, Section};
pub use random::{RandomSource, SequenceRandom, ThreadRandom};
pub use reveal::{
    visible_ratio, watch_reveal, ChannelSource, RevealLatch, RevealState, ScrollProbe,
    SectionRect, Transition, VisibilitySource,
};
pub use timeline::{ExperienceToggle, PRIMARY_EXPERIENCE_COUNT};
