//! Button Components
//!
//! - Primary: filled indigo pill
//! - Outline: indigo border, fills on hover
//! - Glass: translucent hero call-to-action
//! - Ghost: text-only toggle ("Show More Experience")

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Glass,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Glass => "btn-glass",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// button, submit or reset
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Glass,
///         onclick: move |_| scroll_to(Section::About),
///         "Explore My Work"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Link styled as a button (resume download, "View Code")
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    pub href: String,
    pub children: Element,
    #[props(default)]
    pub variant: ButtonVariant,
    /// Open in a new browsing context
    #[props(default = true)]
    pub external: bool,
}

#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let class = props.variant.class();

    rsx! {
        if props.external {
            a {
                class: "{class}",
                href: "{props.href}",
                target: "_blank",
                rel: "noopener noreferrer",
                {props.children}
            }
        } else {
            a { class: "{class}", href: "{props.href}", {props.children} }
        }
    }
}

/// Round social icon link
#[derive(Clone, PartialEq, Props)]
pub struct SocialIconProps {
    pub href: String,
    pub icon: String,
    pub label: String,
    #[props(default = true)]
    pub external: bool,
}

#[component]
pub fn SocialIcon(props: SocialIconProps) -> Element {
    rsx! {
        if props.external {
            a {
                class: "social-icon",
                href: "{props.href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "aria-label": "{props.label}",
                "{props.icon}"
            }
        } else {
            a {
                class: "social-icon",
                href: "{props.href}",
                "aria-label": "{props.label}",
                "{props.icon}"
            }
        }
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Glass.class(), "btn-glass");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn join_classes_skips_empty() {
        assert_eq!(join_classes("btn-primary", None), "btn-primary");
        assert_eq!(join_classes("btn-primary", Some("")), "btn-primary");
        assert_eq!(join_classes("btn-primary", Some("wide")), "btn-primary wide");
    }
}
