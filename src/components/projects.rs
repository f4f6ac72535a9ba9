//! Projects Section Component
//!
//! Category pills over a grid of project cards. Only the visible set changes
//! when the filter changes; cards are keyed by project id.

use dioxus::prelude::*;
use portfolio_core::content::{Project, PROJECTS};
use portfolio_core::motion::{stagger, timing};
use portfolio_core::{Entrance, Gallery, Offset, Section};
use portfolio_ui::{CategoryPills, SectionHeader};

use crate::hooks::use_reveal;

#[component]
pub fn Projects() -> Element {
    let revealed = use_reveal(Section::Projects)();
    let mut gallery = use_signal(|| Gallery::new(PROJECTS));

    let pills_style = Entrance::new(Offset::Rise(20.0), 0.6)
        .with_delay(0.2)
        .style(revealed);

    rsx! {
        section { id: "{Section::Projects.id()}", class: "section alt",
            div { class: "container",
                SectionHeader {
                    title: "Featured Projects",
                    subtitle: "A collection of my recent work, showcasing various technologies and problem-solving approaches",
                    revealed,
                }
                CategoryPills {
                    selected: gallery.read().active(),
                    on_select: move |category| gallery.write().select(category),
                    style: pills_style,
                }
                div { class: "projects-grid",
                    for (i, project) in gallery.read().visible().into_iter().enumerate() {
                        ProjectCard {
                            key: "{project.id}",
                            project: project.clone(),
                            revealed,
                            delay: stagger(0.0, timing::PROJECT_STEP, i),
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    pub project: Project,
    pub revealed: bool,
    #[props(default = 0.0)]
    pub delay: f64,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = &props.project;
    // Keyframes, not a transition: cards listed by a later filter change
    // mount already revealed and must still rise in
    let style = Entrance::new(Offset::Rise(30.0), 0.6)
        .with_delay(props.delay)
        .animation(props.revealed);

    rsx! {
        article { class: "project-card", style: "{style}",
            div { class: "project-banner", style: "background: {project.background};",
                "{project.icon}"
                if project.featured {
                    span { class: "featured-badge", "Featured" }
                }
            }
            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                div { class: "tech-list",
                    for tech in project.tech.iter() {
                        span { key: "{tech}", class: "tech-chip", "{tech}" }
                    }
                }
                a {
                    class: "project-link",
                    href: project.repo_url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View Code"
                }
            }
        }
    }
}
