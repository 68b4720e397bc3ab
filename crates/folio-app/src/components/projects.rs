//! Projects section: featured and other project grids.

use dioxus::prelude::*;

use folio_ui::{use_reveal, DEFAULT_REVEAL_THRESHOLD};

use crate::content::{self, Project};

use super::SectionHeading;

#[component]
pub fn Projects() -> Element {
    let reveal = use_reveal("projects", DEFAULT_REVEAL_THRESHOLD);
    let reveal_class = reveal.read().css_class();

    let featured: Vec<&Project> = content::PROJECTS.iter().filter(|p| p.featured).collect();
    let others: Vec<&Project> = content::PROJECTS.iter().filter(|p| !p.featured).collect();

    rsx! {
        section {
            id: "projects",
            class: "section section-alt",

            div {
                class: "section-inner {reveal_class}",

                SectionHeading {
                    title: "Featured Projects",
                    subtitle: "A showcase of my recent work and personal projects",
                }

                h3 { class: "projects-tier", "Highlighted Work" }
                div {
                    class: "projects-grid projects-grid-featured",
                    for project in featured {
                        div {
                            class: "card project-card",

                            div {
                                class: "project-card-top",
                                h4 { "{project.title}" }
                                span { class: "project-badge", "Featured" }
                            }
                            p { class: "project-description", "{project.description}" }
                            div {
                                class: "chip-row",
                                for tech in project.tech {
                                    span { class: "chip chip-accent", "{tech}" }
                                }
                            }
                            div {
                                class: "project-links",
                                a {
                                    class: "btn btn-muted btn-small",
                                    href: project.github,
                                    target: "_blank",
                                    "Code"
                                }
                                a {
                                    class: "btn btn-primary btn-small",
                                    href: project.live,
                                    target: "_blank",
                                    "Live Demo"
                                }
                            }
                        }
                    }
                }

                h3 { class: "projects-tier", "Other Projects" }
                div {
                    class: "projects-grid projects-grid-other",
                    for project in others {
                        div {
                            class: "card project-card",

                            div {
                                class: "project-card-top",
                                h4 { "{project.title}" }
                                div {
                                    class: "project-links",
                                    a {
                                        class: "icon-link",
                                        href: project.github,
                                        target: "_blank",
                                        title: "Code",
                                        "\u{25D9}"
                                    }
                                    a {
                                        class: "icon-link",
                                        href: project.live,
                                        target: "_blank",
                                        title: "Live demo",
                                        "\u{2197}"
                                    }
                                }
                            }
                            p { class: "project-description", "{project.description}" }
                            div {
                                class: "chip-row",
                                for tech in project.tech {
                                    span { class: "chip", "{tech}" }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "section-cta",
                    a {
                        class: "btn btn-primary",
                        href: content::GITHUB_URL,
                        target: "_blank",
                        "View More on GitHub"
                    }
                }
            }
        }
    }
}
