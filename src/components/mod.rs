//! Page sections, top to bottom.

mod about;
mod contact;
mod effect_overlay;
mod footer;
mod hero;
mod navbar;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use effect_overlay::EffectOverlay;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::{ProjectCard, Projects};
pub use skills::Skills;
