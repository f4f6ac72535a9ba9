//! Section title + subtitle that rises in on reveal.

use dioxus::prelude::*;
use portfolio_core::Entrance;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    pub title: String,
    pub subtitle: String,
    /// Whether the owning section has been revealed
    pub revealed: bool,
    #[props(default = Entrance::header())]
    pub entrance: Entrance,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    let style = props.entrance.style(props.revealed);

    rsx! {
        div { class: "section-header", style: "{style}",
            h2 { class: "section-title", "{props.title}" }
            p { class: "section-subtitle", "{props.subtitle}" }
        }
    }
}
