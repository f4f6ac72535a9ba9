//! Hero Section Component
//!
//! Full-height gradient banner. Lines rise in one after another as soon as
//! the hero is on screen.

use dioxus::prelude::*;
use portfolio_core::content::{CONTRIBUTION_GRAPH_PATH, OWNER_NAME, OWNER_TITLE};
use portfolio_core::{Entrance, Offset, Section};
use portfolio_ui::{Button, ButtonVariant};

use crate::context::scroll_to;
use crate::hooks::use_reveal;

fn line(delay: f64, revealed: bool) -> String {
    Entrance::new(Offset::Rise(30.0), 0.8)
        .with_delay(delay)
        .style(revealed)
}

#[component]
pub fn Hero() -> Element {
    let revealed = use_reveal(Section::Hero)();

    rsx! {
        section { id: "{Section::Hero.id()}", class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-greeting", style: "{line(0.2, revealed)}", "Hello, I'm" }
                h2 { class: "hero-name", style: "{line(0.4, revealed)}", "{OWNER_NAME}" }
                h3 { class: "hero-title", style: "{line(0.6, revealed)}",
                    for (i, part) in OWNER_TITLE.iter().enumerate() {
                        if i > 0 {
                            br {}
                        }
                        "{part}"
                    }
                }
                div { class: "contribution-graph", style: "{line(1.0, revealed)}",
                    img {
                        src: CONTRIBUTION_GRAPH_PATH,
                        alt: "GitHub Contribution Graph - High Activity",
                    }
                    p { class: "contribution-caption",
                        "Consistent contributions showcasing dedication and continuous learning"
                    }
                }
                div { class: "hero-actions", style: "{line(1.4, revealed)}",
                    Button {
                        variant: ButtonVariant::Glass,
                        onclick: move |_| scroll_to(Section::About),
                        "Explore My Work"
                    }
                }
            }
            button {
                class: "scroll-indicator",
                "aria-label": "Scroll to About",
                onclick: move |_| scroll_to(Section::About),
                "\u{2193}"
            }
        }
    }
}
