//! About Section Component
//!
//! Bio, headline stats, the experience timeline with its "show more" toggle,
//! and education.

use dioxus::prelude::*;
use portfolio_core::content::{ABOUT_PARAGRAPHS, EDUCATION, EXPERIENCE, STATS};
use portfolio_core::motion::{stagger, timing};
use portfolio_core::{Entrance, ExperienceToggle, Offset, Section};
use portfolio_ui::{Button, ButtonVariant, SectionHeader, TimelineItem};

use crate::hooks::use_reveal;

/// Stat tiles pop in from nothing, 0.2s apart.
fn stat_style(index: usize, revealed: bool) -> String {
    Entrance::new(Offset::Scale(0.0), 0.5)
        .with_delay(stagger(0.4, 0.2, index))
        .style(revealed)
}

#[component]
pub fn About() -> Element {
    let revealed = use_reveal(Section::About)();
    let mut toggle = use_signal(ExperienceToggle::default);

    let text_style = Entrance::new(Offset::Slide(-30.0), 0.8)
        .with_delay(0.2)
        .style(revealed);
    let expanded = toggle.read().is_expanded();
    let hidden = toggle.read().hidden_count(EXPERIENCE);

    rsx! {
        section { id: "{Section::About.id()}", class: "section",
            div { class: "container",
                SectionHeader {
                    title: "About Me",
                    subtitle: "A passionate software engineer with a love for elegant code and innovative solutions",
                    revealed,
                }
                div { class: "about-grid",
                    div { class: "about-text", style: "{text_style}",
                        h3 { class: "timeline-heading", "Who I Am" }
                        for paragraph in ABOUT_PARAGRAPHS.iter() {
                            p { "{paragraph}" }
                        }
                        div { class: "stats-grid",
                            for (i, stat) in STATS.iter().enumerate() {
                                div {
                                    key: "{stat.label}",
                                    class: "stat-tile",
                                    style: "{stat_style(i, revealed)}",
                                    div { class: "stat-value", "{stat.value}" }
                                    div { class: "stat-label", "{stat.label}" }
                                }
                            }
                        }
                    }
                    div { class: "timeline-group",
                        h3 { class: "timeline-heading", "Professional Experience" }
                        div { class: "timeline",
                            for (i, entry) in toggle.read().visible(EXPERIENCE).iter().enumerate() {
                                TimelineItem {
                                    key: "{entry.period}",
                                    entry: entry.clone(),
                                    revealed,
                                    delay: stagger(timing::TIMELINE_BASE, timing::TIMELINE_STEP, i),
                                }
                            }
                        }
                        div { class: "timeline-toggle",
                            if expanded {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| toggle.write().show_less(),
                                    "Show Less"
                                }
                            } else if hidden > 0 {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| toggle.write().show_more(),
                                    "Show More Experience"
                                }
                            }
                        }
                    }
                }
                div { class: "timeline-group education",
                    SectionHeader {
                        title: "Education",
                        subtitle: "Academic achievements and educational background",
                        revealed,
                    }
                    div { class: "timeline",
                        for (i, entry) in EDUCATION.iter().enumerate() {
                            TimelineItem {
                                key: "{entry.period}",
                                entry: entry.clone(),
                                revealed,
                                delay: stagger(timing::TIMELINE_BASE, timing::TIMELINE_STEP, i),
                            }
                        }
                    }
                }
            }
        }
    }
}
