//! UI components for the portfolio app, one module per section.

mod about;
mod app;
mod contact;
mod education;
mod experience;
mod header;
mod hero;
mod projects;
mod skills;

pub use about::*;
pub use app::*;
pub use contact::*;
pub use education::*;
pub use experience::*;
pub use header::*;
pub use hero::*;
pub use projects::*;
pub use skills::*;

use dioxus::prelude::*;

/// Smooth-scrolls the page to the section with the given element id.
pub(crate) fn scroll_to_section(id: &str) {
    let js = format!("document.getElementById('{id}')?.scrollIntoView({{behavior:'smooth'}})");
    document::eval(&js);
}

/// Centered section heading with gradient title and accent underline.
#[component]
pub(crate) fn SectionHeading(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "section-heading",
            h2 { class: "gradient-text", "{title}" }
            div { class: "heading-underline" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
