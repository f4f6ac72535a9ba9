//! Skill proficiency bar and tag.
//!
//! The fill stays at 0% until the section is revealed, then animates to the
//! skill level after `delay` seconds.

use dioxus::prelude::*;
use portfolio_core::motion::bar_fill_style;
use portfolio_core::{Entrance, Offset};

#[derive(Clone, PartialEq, Props)]
pub struct SkillBarProps {
    pub name: String,
    /// Percent, 0..=100
    pub level: u8,
    pub revealed: bool,
    /// Seconds before the fill starts
    #[props(default = 0.0)]
    pub delay: f64,
}

#[component]
pub fn SkillBar(props: SkillBarProps) -> Element {
    let fill = bar_fill_style(props.level, props.revealed, props.delay);

    rsx! {
        div { class: "skill-item",
            div { class: "skill-header",
                span { class: "skill-name", "{props.name}" }
                span { class: "skill-level", "{props.level}%" }
            }
            div { class: "skill-bar",
                div { class: "skill-progress", style: "{fill}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SkillTagProps {
    pub label: String,
    pub revealed: bool,
    #[props(default = 0.0)]
    pub delay: f64,
}

/// Pill in the "Additional Skills & Tools" cloud; pops in from scale 0.
#[component]
pub fn SkillTag(props: SkillTagProps) -> Element {
    let style = Entrance::new(Offset::Scale(0.0), 0.4)
        .with_delay(props.delay)
        .style(props.revealed);

    rsx! {
        span { class: "skill-tag", style: "{style}", "{props.label}" }
    }
}
