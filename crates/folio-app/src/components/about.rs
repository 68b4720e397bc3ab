//! About section: intro, highlight cards, and fun facts.

use dioxus::prelude::*;

use folio_ui::{use_reveal, DEFAULT_REVEAL_THRESHOLD};

use super::SectionHeading;

#[component]
pub fn About() -> Element {
    let reveal = use_reveal("about", DEFAULT_REVEAL_THRESHOLD);
    let reveal_class = reveal.read().css_class();

    rsx! {
        section {
            id: "about",
            class: "section section-alt",

            div {
                class: "section-inner {reveal_class}",

                SectionHeading { title: "About Me" }

                div {
                    class: "about-grid",

                    div {
                        class: "about-text",

                        div {
                            class: "card",
                            h3 { "Hello! I'm Yashwanth Chunchula" }
                            p {
                                "I'm a passionate Computer Science student specializing in Data Science at "
                                "Kommuri Pratap Reddy Institute of Technology. Currently in my second year, "
                                "I'm building a strong foundation in both theoretical concepts and practical applications."
                            }
                            p {
                                "My journey in technology is driven by curiosity and a love for problem-solving. "
                                "I enjoy creating web applications, exploring data science techniques, and working "
                                "with Python to build meaningful solutions."
                            }
                            p {
                                "When I'm not coding, you'll find me learning new technologies, contributing to "
                                "open-source projects, or exploring the latest trends in artificial intelligence "
                                "and machine learning."
                            }
                        }

                        button {
                            class: "btn btn-primary",
                            "\u{2913} Download Resume"
                        }
                    }

                    div {
                        class: "about-side",

                        div {
                            class: "highlight-grid",

                            div {
                                class: "card highlight-card",
                                div { class: "highlight-icon", "\u{2328}" }
                                h4 { "Web Development" }
                                p { "Creating responsive and interactive web applications" }
                            }
                            div {
                                class: "card highlight-card",
                                div { class: "highlight-icon", "\u{2661}" }
                                h4 { "Problem Solving" }
                                p { "Tackling complex challenges with innovative solutions" }
                            }
                        }

                        div {
                            class: "card fun-facts",
                            h4 { "\u{2615} Fun Facts" }
                            ul {
                                li { "Currently maintaining a 7.5 CGPA while pursuing CSE - Data Science" }
                                li { "Passionate about combining creativity with technology" }
                                li { "Always excited to learn new programming languages and frameworks" }
                            }
                        }
                    }
                }
            }
        }
    }
}
