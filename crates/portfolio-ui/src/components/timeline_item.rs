//! Timeline entry (experience and education).

use dioxus::prelude::*;
use portfolio_core::content::TimelineEntry;
use portfolio_core::{Entrance, Offset};

#[derive(Clone, PartialEq, Props)]
pub struct TimelineItemProps {
    pub entry: TimelineEntry,
    pub revealed: bool,
    #[props(default = 0.0)]
    pub delay: f64,
}

/// Dot + period + title + description, sliding in from the right.
#[component]
pub fn TimelineItem(props: TimelineItemProps) -> Element {
    let style = Entrance::new(Offset::Slide(20.0), 0.6)
        .with_delay(props.delay)
        .style(props.revealed);
    let entry = &props.entry;

    rsx! {
        div { class: "timeline-item", style: "{style}",
            div { class: "timeline-dot" }
            div { class: "timeline-content",
                div { class: "timeline-year", "{entry.period}" }
                h4 { class: "timeline-item-title", "{entry.title}" }
                p { class: "timeline-description",
                    "{entry.description}"
                    if let Some(highlight) = entry.highlight {
                        " "
                        span { class: "achievement-highlight", "{highlight}" }
                    }
                }
            }
        }
    }
}
