//! Reusable UI components
//!
//! Every animated component takes `revealed` plus an [`Entrance`] or delay
//! and renders the inline style from `portfolio_core::motion`.
//!
//! [`Entrance`]: portfolio_core::Entrance

mod button;
mod category_pills;
mod input;
mod section_header;
mod skill_bar;
mod timeline_item;

pub use button::*;
pub use category_pills::*;
pub use input::*;
pub use section_header::*;
pub use skill_bar::*;
pub use timeline_item::*;
