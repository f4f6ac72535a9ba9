//! Skills Section Component
//!
//! Proficiency bars grouped by category, then the tag cloud. Bars fill and
//! tags pop in once the section is revealed.

use dioxus::prelude::*;
use portfolio_core::content::{ADDITIONAL_SKILLS, SKILL_CATEGORIES};
use portfolio_core::motion::{stagger, timing};
use portfolio_core::{Entrance, Offset, Section};
use portfolio_ui::{SectionHeader, SkillBar, SkillTag};

use crate::hooks::use_reveal;

#[component]
pub fn Skills() -> Element {
    let revealed = use_reveal(Section::Skills)();

    let cloud_style = Entrance::new(Offset::Rise(30.0), 0.8)
        .with_delay(0.8)
        .style(revealed);

    rsx! {
        section { id: "{Section::Skills.id()}", class: "section",
            div { class: "container",
                SectionHeader {
                    title: "Technical Skills",
                    subtitle: "A comprehensive overview of my technical expertise and proficiency levels",
                    revealed,
                }
                div { class: "skills-grid",
                    for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
                        div {
                            key: "{category.title}",
                            class: "skill-category",
                            style: "{category_style(i, revealed)}",
                            h3 { class: "skill-category-title",
                                span { "{category.icon}" }
                                "{category.title}"
                            }
                            for (j, skill) in category.skills.iter().enumerate() {
                                SkillBar {
                                    key: "{skill.name}",
                                    name: "{skill.name}",
                                    level: skill.level(),
                                    revealed,
                                    delay: stagger(timing::SKILL_BAR_BASE, timing::SKILL_BAR_STEP, j),
                                }
                            }
                        }
                    }
                }
                div { class: "additional-skills", style: "{cloud_style}",
                    h3 { "Additional Skills & Tools" }
                    div { class: "skill-cloud",
                        for (k, tag) in ADDITIONAL_SKILLS.iter().enumerate() {
                            SkillTag {
                                key: "{tag}",
                                label: "{tag}",
                                revealed,
                                delay: stagger(timing::TAG_BASE, timing::TAG_STEP, k),
                            }
                        }
                    }
                }
            }
        }
    }
}

fn category_style(index: usize, revealed: bool) -> String {
    Entrance::new(Offset::Rise(30.0), 0.6)
        .with_delay(stagger(0.0, timing::SKILL_CATEGORY_STEP, index))
        .style(revealed)
}
