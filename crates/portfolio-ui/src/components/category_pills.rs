//! Category Pills Component
//!
//! Horizontal row of gallery filter pills. The active pill is filled indigo.

use dioxus::prelude::*;
use portfolio_core::Category;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Currently selected category
    pub selected: Category,
    /// Handler called when a category is selected
    pub on_select: EventHandler<Category>,
    /// Inline style for the row (entrance animation)
    #[props(default)]
    pub style: String,
}

/// Displays every [`Category`] as a selectable pill
///
/// # Example
///
/// ```rust,ignore
/// let mut gallery = use_signal(|| Gallery::new(PROJECTS));
///
/// rsx! {
///     CategoryPills {
///         selected: gallery.read().active(),
///         on_select: move |cat| gallery.write().select(cat)
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Project category",
            style: "{props.style}",
            for cat in Category::ALL {
                {
                    let is_selected = props.selected == cat;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{cat.id()}",
                            class: pill_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(cat),
                            "{cat.label()}"
                        }
                    }
                }
            }
        }
    }
}

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}
