//! Contact section: channel list and the simulated contact form.

use std::time::Duration;

use dioxus::prelude::*;

use folio_ui::{use_reveal, DEFAULT_REVEAL_THRESHOLD};

use crate::content;
use crate::state::{ContactForm, SubmitStatus};

use super::SectionHeading;

/// Simulated submission round trip.
const SUBMIT_DELAY_MS: u64 = 2000;
/// How long the outcome banner stays up before returning to idle.
const STATUS_RESET_MS: u64 = 3000;

#[component]
pub fn Contact() -> Element {
    let reveal = use_reveal("contact", DEFAULT_REVEAL_THRESHOLD);
    let reveal_class = reveal.read().css_class();

    let mut form = use_signal(ContactForm::new);
    let status = form.read().status;
    let button_label = if status == SubmitStatus::Submitting {
        "Sending..."
    } else {
        "Send Message"
    };

    let submit = move |_| {
        if !form.write().begin_submit() {
            return;
        }
        spawn(async move {
            // No real backend: sleep for the simulated round trip.
            tokio::time::sleep(Duration::from_millis(SUBMIT_DELAY_MS)).await;
            form.write().finish(true);
            tokio::time::sleep(Duration::from_millis(STATUS_RESET_MS)).await;
            form.write().acknowledge();
        });
    };

    rsx! {
        section {
            id: "contact",
            class: "section",

            div {
                class: "section-inner {reveal_class}",

                SectionHeading {
                    title: "Get In Touch",
                    subtitle: "I'm always open to discussing new opportunities, projects, or just having a chat about technology",
                }

                div {
                    class: "contact-grid",

                    div {
                        class: "contact-channels",
                        for channel in content::CONTACT_CHANNELS {
                            div {
                                class: "card contact-channel",

                                span { class: "contact-glyph", "{channel.glyph}" }
                                div {
                                    class: "contact-channel-text",
                                    span { class: "contact-label", "{channel.label}" }
                                    if let Some(href) = channel.href {
                                        a { class: "contact-value", href: href, "{channel.value}" }
                                    } else {
                                        span { class: "contact-value", "{channel.value}" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "card contact-form",

                        label { class: "form-label", "Name" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Your name",
                            value: "{form.read().name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }

                        label { class: "form-label", "Email" }
                        input {
                            class: "form-input",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{form.read().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }

                        label { class: "form-label", "Message" }
                        textarea {
                            class: "form-input form-textarea",
                            placeholder: "What would you like to talk about?",
                            value: "{form.read().message}",
                            oninput: move |evt| form.write().message = evt.value(),
                        }

                        button {
                            class: "btn btn-primary",
                            disabled: status == SubmitStatus::Submitting,
                            onclick: submit,
                            "{button_label}"
                        }

                        if status == SubmitStatus::Success {
                            p { class: "form-status form-status-success", "Message sent successfully!" }
                        }
                        if status == SubmitStatus::Error {
                            p { class: "form-status form-status-error", "Something went wrong. Please try again." }
                        }
                    }
                }
            }
        }
    }
}
