//! Footer Component

use dioxus::prelude::*;
use portfolio_core::content::{social_links, OWNER_NAME};
use portfolio_core::Section;
use portfolio_ui::SocialIcon;

use crate::context::scroll_to;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-top",
                    div { class: "footer-logo", "{OWNER_NAME}" }
                    div { class: "footer-social",
                        for link in social_links() {
                            SocialIcon {
                                key: "{link.label}",
                                href: "{link.href}",
                                icon: "{link.icon}",
                                label: "{link.label}",
                                external: link.opens_externally(),
                            }
                        }
                    }
                }
                div { class: "footer-bottom",
                    p { class: "copyright", "\u{00A9} 2024 {OWNER_NAME}. All rights reserved." }
                    ul { class: "footer-links",
                        for section in Section::NAV {
                            li { key: "{section.id()}",
                                button {
                                    class: "footer-link",
                                    onclick: move |_| scroll_to(section),
                                    "{section.label()}"
                                }
                            }
                        }
                    }
                }
                div { class: "back-to-top",
                    button {
                        class: "btn-outline",
                        onclick: move |_| scroll_to(Section::Hero),
                        "Back to Top \u{2191}"
                    }
                }
            }
        }
    }
}
