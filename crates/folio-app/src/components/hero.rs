//! Full-height hero banner with typewriter headline.

use std::time::Duration;

use dioxus::prelude::*;

use crate::content;

use super::scroll_to_section;

/// Delay between typed characters in the headline.
const TYPE_INTERVAL_MS: u64 = 100;

#[component]
pub fn Hero() -> Element {
    let mut typed_len = use_signal(|| 0usize);

    // Types the full name one character at a time, then stops.
    use_future(move || async move {
        let total = content::FULL_NAME.chars().count();
        for len in 1..=total {
            tokio::time::sleep(Duration::from_millis(TYPE_INTERVAL_MS)).await;
            typed_len.set(len);
        }
    });

    let typed: String = content::FULL_NAME.chars().take(typed_len()).collect();
    let greeting = content::GREETING;
    let tagline = content::TAGLINE;
    let email = content::EMAIL_ADDRESS;

    rsx! {
        section {
            id: "home",
            class: "hero",

            div { class: "hero-backdrop",
                for i in 0..6 {
                    div { class: "hero-orb hero-orb-{i}" }
                }
            }

            div {
                class: "hero-content",

                span { class: "hero-greeting", "{greeting}" }

                h1 {
                    class: "hero-title",
                    span { class: "gradient-text", "{typed}" }
                    span { class: "hero-cursor", "|" }
                }

                p { class: "hero-tagline", "{tagline}" }

                div {
                    class: "hero-actions",

                    button {
                        class: "btn btn-primary",
                        onclick: move |_| scroll_to_section("projects"),
                        "View Projects \u{2193}"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| scroll_to_section("contact"),
                        "Contact Me"
                    }
                    a {
                        class: "btn btn-muted",
                        href: content::RESUME_PATH,
                        download: "Yashwanth-Chunchula-Resume.pdf",
                        "\u{2913} Resume"
                    }
                }

                div {
                    class: "hero-social",

                    a {
                        class: "social-link",
                        href: content::GITHUB_URL,
                        target: "_blank",
                        title: "GitHub",
                        "\u{25D9}"
                    }
                    a {
                        class: "social-link",
                        href: content::LINKEDIN_URL,
                        target: "_blank",
                        title: "LinkedIn",
                        "\u{25A4}"
                    }
                    a {
                        class: "social-link",
                        href: "mailto:{email}",
                        title: "Email",
                        "\u{2709}"
                    }
                }
            }

            div { class: "hero-scroll-hint", "\u{2193}" }
        }
    }
}
