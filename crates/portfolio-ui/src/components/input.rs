//! Contact form inputs.
//!
//! Labels and control names come from [`Field`], so the form markup and the
//! form state agree on field identity.

use dioxus::prelude::*;
use portfolio_core::Field;

/// Properties for the FormInput component
#[derive(Clone, PartialEq, Props)]
pub struct FormInputProps {
    pub field: Field,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line labelled input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormInput {
///         field: Field::Email,
///         value: form.read().value(Field::Email).to_string(),
///         oninput: move |v| form.write().set_field(Field::Email, v)
///     }
/// }
/// ```
#[component]
pub fn FormInput(props: FormInputProps) -> Element {
    let name = props.field.name();

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{name}", "{props.field.label()}" }
            input {
                id: "{name}",
                name: "{name}",
                class: "form-input",
                r#type: "{props.field.input_type()}",
                value: "{props.value}",
                required: true,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the FormTextArea component
#[derive(Clone, PartialEq, Props)]
pub struct FormTextAreaProps {
    pub field: Field,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = 6)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line labelled input
#[component]
pub fn FormTextArea(props: FormTextAreaProps) -> Element {
    let name = props.field.name();

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{name}", "{props.field.label()}" }
            textarea {
                id: "{name}",
                name: "{name}",
                class: "form-input form-textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: true,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
