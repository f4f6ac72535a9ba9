//! Contact Section Component
//!
//! Contact details on the left, the message form on the right. The form is
//! driven by `run_submission`: the button shows "Sending..." while the
//! submitter runs, a success banner stays up for the configured period, and
//! a failure keeps the typed fields and offers a retry.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::content::{CONTACT_LINKS, OWNER_LOCATION, RESUME_PATH};
use portfolio_core::{
    run_submission, ContactForm, Entrance, Field, FormHandle, Offset, Section,
    SimulatedSubmitter,
};
use portfolio_ui::{Button, ButtonVariant, FormInput, FormTextArea, LinkButton, SectionHeader};

use crate::context::use_config;
use crate::hooks::use_reveal;

/// Form state held in a component signal.
#[derive(Clone, Copy)]
struct SignalForm(Signal<ContactForm>);

impl FormHandle for SignalForm {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        let mut form = self.0;
        form.with_mut(f)
    }
}

/// Spawn one submission on the component's scope.
fn submit(form: Signal<ContactForm>, delay: Duration, success_display: Duration) {
    spawn(async move {
        let submitter = SimulatedSubmitter::new(delay);
        if let Err(e) = run_submission(&SignalForm(form), &submitter, success_display).await {
            tracing::debug!(error = %e, "Contact submission not completed");
        }
    });
}

#[component]
pub fn Contact() -> Element {
    let revealed = use_reveal(Section::Contact)();
    let config = use_config();
    let delay = config.submit_delay();
    let success_display = config.success_display();
    let mut form = use_signal(ContactForm::default);

    let info_style = Entrance::new(Offset::Slide(-30.0), 0.8)
        .with_delay(0.2)
        .style(revealed);
    let form_style = Entrance::new(Offset::Slide(30.0), 0.8)
        .with_delay(0.4)
        .style(revealed);

    let current = form.read().clone();
    let submitting = current.is_submitting();

    rsx! {
        section { id: "{Section::Contact.id()}", class: "section alt",
            div { class: "container",
                SectionHeader {
                    title: "Get In Touch",
                    subtitle: "I'm always open to discussing new opportunities, interesting projects, or just having a chat about technology",
                    revealed,
                }
                div { class: "contact-grid",
                    div { class: "contact-info", style: "{info_style}",
                        h3 { "Let's Connect" }
                        div { class: "contact-links",
                            for link in CONTACT_LINKS.iter() {
                                a {
                                    key: "{link.label}",
                                    class: "contact-link",
                                    href: link.href,
                                    target: if link.opens_externally() { "_blank" } else { "_self" },
                                    rel: "noopener noreferrer",
                                    div { class: "contact-link-icon", "{link.icon}" }
                                    div {
                                        div { class: "contact-link-label", "{link.label}" }
                                        div { class: "contact-link-value", "{link.display}" }
                                    }
                                }
                            }
                            div { class: "contact-link",
                                div { class: "contact-link-icon", "\u{1F4CD}" }
                                div {
                                    div { class: "contact-link-label", "Location" }
                                    div { class: "contact-link-value", "{OWNER_LOCATION}" }
                                }
                            }
                        }
                    }
                    form {
                        class: "contact-form",
                        style: "{form_style}",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            submit(form, delay, success_display);
                        },
                        h3 { "Send Me a Message" }
                        if current.success_visible() {
                            div { class: "form-banner success", role: "status",
                                "Thank you! Your message has been sent successfully."
                            }
                        }
                        if let Some(err) = current.error() {
                            div { class: "form-banner error", role: "alert",
                                span { "{err}" }
                                if err.is_retryable() {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| submit(form, delay, success_display),
                                        "Retry"
                                    }
                                }
                            }
                        }
                        div { class: "form-row",
                            FormInput {
                                field: Field::Name,
                                value: "{current.value(Field::Name)}",
                                oninput: move |v: String| form.write().set_field(Field::Name, v),
                            }
                            FormInput {
                                field: Field::Email,
                                value: "{current.value(Field::Email)}",
                                oninput: move |v: String| form.write().set_field(Field::Email, v),
                            }
                        }
                        FormInput {
                            field: Field::Subject,
                            value: "{current.value(Field::Subject)}",
                            oninput: move |v: String| form.write().set_field(Field::Subject, v),
                        }
                        FormTextArea {
                            field: Field::Message,
                            value: "{current.value(Field::Message)}",
                            placeholder: "Tell me about your project or just say hello!",
                            oninput: move |v: String| form.write().set_field(Field::Message, v),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            class: "form-submit",
                            disabled: submitting,
                            if submitting { "Sending..." } else { "Send Message" }
                        }
                        div { class: "resume-link",
                            LinkButton {
                                href: "{RESUME_PATH}",
                                variant: ButtonVariant::Outline,
                                "\u{1F4C4} Download Resume"
                            }
                        }
                    }
                }
            }
        }
    }
}
