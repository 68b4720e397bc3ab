//! Education section: degree, key subjects, and certifications.

use dioxus::prelude::*;

use folio_ui::{use_reveal, DEFAULT_REVEAL_THRESHOLD};

use crate::content;

use super::SectionHeading;

#[component]
pub fn Education() -> Element {
    let reveal = use_reveal("education", DEFAULT_REVEAL_THRESHOLD);
    let reveal_class = reveal.read().css_class();
    let learning = content::CONTINUOUS_LEARNING;

    rsx! {
        section {
            id: "education",
            class: "section section-alt",

            div {
                class: "section-inner {reveal_class}",

                SectionHeading {
                    title: "Education & Learning",
                    subtitle: "My academic journey and continuous learning path in technology",
                }

                h3 { class: "education-tier", "\u{1F393} Academic Background" }
                for edu in content::EDUCATION {
                    div {
                        class: "card education-card",

                        div {
                            class: "education-meta",
                            span { class: "chip chip-accent", "Currently Studying" }
                            span { class: "education-detail", "\u{1F4C5} {edu.duration}" }
                            span { class: "education-detail", "\u{2316} {edu.location}" }
                            span { class: "education-detail", "CGPA: {edu.cgpa}" }
                        }

                        h3 { "{edu.degree}" }
                        h4 { class: "education-institution", "{edu.institution}" }
                        p { "{edu.description}" }

                        div {
                            class: "education-columns",

                            div {
                                h5 { "Key Subjects" }
                                div {
                                    class: "chip-row",
                                    for subject in edu.subjects {
                                        span { class: "chip chip-accent", "{subject}" }
                                    }
                                }
                            }

                            div {
                                h5 { "Achievements" }
                                ul {
                                    class: "achievement-list",
                                    for achievement in edu.achievements {
                                        li { "{achievement}" }
                                    }
                                }
                            }
                        }
                    }
                }

                h3 { class: "education-tier", "\u{2756} Certifications & Courses" }
                div {
                    class: "cert-grid",
                    for cert in content::CERTIFICATIONS {
                        div {
                            class: "card cert-card",

                            div {
                                class: "cert-card-top",
                                span { class: "cert-badge {cert.status.badge_class()}", "{cert.status.label()}" }
                            }
                            h4 { "{cert.title}" }
                            p { class: "cert-platform", "{cert.platform}" }
                            p { class: "cert-date", "{cert.date}" }
                        }
                    }
                }

                div {
                    class: "card outlook-card",
                    h3 { "Continuous Learning" }
                    p { "{learning}" }
                }
            }
        }
    }
}
