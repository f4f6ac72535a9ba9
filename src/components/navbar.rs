//! Navigation Bar Component
//!
//! Fixed top bar. Transparent over the hero, solid once the window has
//! scrolled past the configured offset. On narrow windows the links collapse
//! into a toggled menu; choosing a link closes it.

use dioxus::prelude::*;
use portfolio_core::content::OWNER_NAME;
use portfolio_core::{NavState, Section};

use crate::context::{scroll_to_id, use_config};
use crate::hooks::ScrollWatcher;

#[component]
pub fn Navbar() -> Element {
    let threshold = use_config().nav_scroll_threshold;
    let mut nav = use_signal(|| NavState::new(threshold));

    use_future(move || async move {
        let mut watcher = ScrollWatcher::start();
        while let Some(scroll_y) = watcher.next().await {
            // Only write on a flip
            let mut next = *nav.peek();
            if next.on_scroll(scroll_y) {
                tracing::debug!(scrolled = next.scrolled(), "Nav background changed");
                nav.set(next);
            }
        }
    });

    let mut go = move |section: Section| {
        let id = nav.write().navigate(section);
        scroll_to_id(id);
    };

    let state = nav();
    let bar_class = if state.scrolled() { "navbar scrolled" } else { "navbar" };
    let links_class = if state.menu_open() { "nav-links open" } else { "nav-links" };

    rsx! {
        nav { class: "{bar_class}",
            div { class: "container nav-inner",
                button {
                    class: "nav-logo",
                    onclick: move |_| go(Section::Hero),
                    "{OWNER_NAME}"
                }
                button {
                    class: "menu-toggle",
                    "aria-label": "Toggle menu",
                    "aria-expanded": if state.menu_open() { "true" } else { "false" },
                    onclick: move |_| nav.write().toggle_menu(),
                    if state.menu_open() { "\u{2715}" } else { "\u{2630}" }
                }
                ul { class: "{links_class}",
                    for section in Section::NAV {
                        li { key: "{section.id()}",
                            button {
                                class: "nav-link",
                                onclick: move |_| go(section),
                                "{section.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
