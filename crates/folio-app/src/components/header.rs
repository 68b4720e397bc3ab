//! Fixed navigation header with theme toggle and mobile menu.

use dioxus::prelude::*;

use folio_ui::ThemeToggle;

use crate::content;

use super::scroll_to_section;

/// Scroll depth in pixels past which the header gains its solid backdrop.
const SCROLL_THRESHOLD_PX: u32 = 50;

/// Watches window scroll depth and reports threshold crossings only.
fn scroll_watch_js() -> String {
    format!(
        r#"(function() {{
            if (window.__folio_scroll_watch) {{
                window.removeEventListener('scroll', window.__folio_scroll_watch);
            }}
            var last = null;
            var handler = function() {{
                var top = window.scrollY || document.documentElement.scrollTop || 0;
                var scrolled = top > {SCROLL_THRESHOLD_PX};
                if (scrolled !== last) {{ last = scrolled; dioxus.send(scrolled); }}
            }};
            window.__folio_scroll_watch = handler;
            window.addEventListener('scroll', handler, {{ passive: true }});
            handler();
        }})();"#
    )
}

/// Fixed top navigation bar.
#[component]
pub fn Header() -> Element {
    let mut is_scrolled = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    use_future(move || async move {
        let mut eval = document::eval(&scroll_watch_js());
        while let Ok(scrolled) = eval.recv::<bool>().await {
            is_scrolled.set(scrolled);
        }
    });

    let header_class = if is_scrolled() {
        "site-header scrolled"
    } else {
        "site-header"
    };

    rsx! {
        header {
            class: "{header_class}",

            div {
                class: "header-inner",

                div { class: "brand gradient-text", "YC" }

                nav {
                    class: "nav-desktop",
                    for item in content::NAV_ITEMS {
                        button {
                            class: "nav-link",
                            onclick: move |_| scroll_to_section(item.id),
                            span { class: "nav-glyph", "{item.glyph}" }
                            span { "{item.label}" }
                        }
                    }
                }

                div {
                    class: "header-actions",

                    ThemeToggle {}

                    button {
                        class: "menu-toggle",
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        if menu_open() { "\u{2715}" } else { "\u{2630}" }
                    }
                }
            }

            if menu_open() {
                nav {
                    class: "nav-mobile",
                    for item in content::NAV_ITEMS {
                        button {
                            class: "nav-link",
                            onclick: move |_| {
                                menu_open.set(false);
                                scroll_to_section(item.id);
                            },
                            span { class: "nav-glyph", "{item.glyph}" }
                            span { "{item.label}" }
                        }
                    }
                }
            }
        }
    }
}
