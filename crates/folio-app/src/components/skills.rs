//! Skills section: category cards with animated proficiency bars.

use dioxus::prelude::*;

use folio_ui::{use_reveal, DEFAULT_REVEAL_THRESHOLD};

use crate::content;

use super::SectionHeading;

/// Fill-animation stagger per category and per skill within a category.
const CATEGORY_STAGGER_MS: usize = 200;
const SKILL_STAGGER_MS: usize = 100;

#[component]
pub fn Skills() -> Element {
    let reveal = use_reveal("skills", DEFAULT_REVEAL_THRESHOLD);
    let revealed = reveal.read().is_visible();
    let reveal_class = reveal.read().css_class();

    rsx! {
        section {
            id: "skills",
            class: "section",

            div {
                class: "section-inner {reveal_class}",

                SectionHeading {
                    title: "Skills & Expertise",
                    subtitle: "Technologies and tools I've been working with recently",
                }

                div {
                    class: "skills-grid",

                    for (ci, category) in content::SKILL_CATEGORIES.iter().enumerate() {
                        div {
                            class: "card skill-card",

                            div { class: "skill-card-icon", "{category.glyph}" }
                            h3 { "{category.name}" }

                            div {
                                class: "skill-list",
                                for (si, skill) in category.skills.iter().enumerate() {
                                    SkillBar {
                                        name: skill.name.to_string(),
                                        level: skill.level,
                                        delay_ms: ci * CATEGORY_STAGGER_MS + si * SKILL_STAGGER_MS,
                                        revealed,
                                    }
                                }
                            }
                        }
                    }
                }

                p {
                    class: "section-footnote",
                    "Always learning and exploring new technologies to expand my skill set"
                }
            }
        }
    }
}

/// Labeled proficiency bar. The fill grows from zero to `level`% once the
/// section reveals; the stagger delay runs in CSS.
#[component]
fn SkillBar(name: String, level: u8, delay_ms: usize, revealed: bool) -> Element {
    let pct = if revealed { level.min(100) } else { 0 };

    rsx! {
        div {
            class: "skill-row",

            div {
                class: "skill-row-header",
                span { class: "skill-name", "{name}" }
                span { class: "skill-level", "{level}%" }
            }
            div {
                class: "skill-track",
                div {
                    class: "skill-fill",
                    style: "width: {pct}%; transition-delay: {delay_ms}ms;",
                }
            }
        }
    }
}
