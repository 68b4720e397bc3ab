//! Experience section: timeline of roles and goals.

use dioxus::prelude::*;

use folio_ui::{use_reveal, DEFAULT_REVEAL_THRESHOLD};

use crate::content;

use super::SectionHeading;

#[component]
pub fn Experience() -> Element {
    let reveal = use_reveal("experience", DEFAULT_REVEAL_THRESHOLD);
    let reveal_class = reveal.read().css_class();
    let outlook = content::EXPERIENCE_OUTLOOK;

    rsx! {
        section {
            id: "experience",
            class: "section",

            div {
                class: "section-inner section-inner-narrow {reveal_class}",

                SectionHeading {
                    title: "Experience & Journey",
                    subtitle: "My learning journey and experiences as a developing software engineer",
                }

                div {
                    class: "timeline",

                    for entry in content::EXPERIENCES {
                        div {
                            class: "timeline-entry",

                            div { class: "timeline-dot {entry.status.dot_class()}", "\u{25C8}" }

                            div {
                                class: "card timeline-card",

                                div {
                                    class: "timeline-card-meta",
                                    span { class: "chip chip-accent", "{entry.kind}" }
                                    span { class: "timeline-detail", "\u{1F4C5} {entry.duration}" }
                                    span { class: "timeline-detail", "\u{2316} {entry.location}" }
                                }

                                h3 { "{entry.role}" }
                                h4 { class: "timeline-company", "{entry.company}" }
                                p { "{entry.description}" }

                                div {
                                    class: "chip-row",
                                    for skill in entry.skills {
                                        span { class: "chip", "{skill}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "card outlook-card",
                    h3 { "Looking Forward" }
                    p { "{outlook}" }
                }
            }
        }
    }
}
