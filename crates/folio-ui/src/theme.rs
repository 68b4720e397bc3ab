//! Theme glue between the appearance store and the component tree.
//!
//! The store owns the mode; `CURRENT_MODE` is the broadcast surface
//! components read. The store's subscriber keeps the signal in sync, so
//! a toggle is observable by every component before the click handler
//! returns.

use std::sync::{Mutex, OnceLock};

use dioxus::prelude::*;

use crate::appearance::{AppearanceMode, AppearanceStore, FilePreferences};

/// Global signal for the current appearance mode.
pub static CURRENT_MODE: GlobalSignal<AppearanceMode> = GlobalSignal::new(|| AppearanceMode::default());

static STORE: OnceLock<Mutex<AppearanceStore>> = OnceLock::new();

/// Host-level appearance default, read from the environment.
///
/// The desktop webview exposes no portable dark-mode query, so the host
/// preference travels in `FOLIO_APPEARANCE`.
fn host_appearance() -> Option<AppearanceMode> {
    std::env::var("FOLIO_APPEARANCE")
        .ok()
        .as_deref()
        .and_then(AppearanceMode::from_persisted)
}

fn store() -> &'static Mutex<AppearanceStore> {
    STORE.get_or_init(|| {
        let prefs = FilePreferences::new(FilePreferences::default_path());
        let mut store = AppearanceStore::new(Box::new(prefs));
        let mode = store.initialize(host_appearance());
        tracing::info!("appearance initialized: {}", mode.display_name());
        store.subscribe(|mode| *CURRENT_MODE.write() = mode);
        Mutex::new(store)
    })
}

/// Seeds `CURRENT_MODE` from the store. Call once from the root component.
pub fn initialize_appearance() {
    let mode = store().lock().unwrap().mode();
    *CURRENT_MODE.write() = mode;
}

/// Flips the mode. The signal update arrives synchronously through the
/// store's subscriber before this returns.
pub fn toggle_appearance() -> AppearanceMode {
    store().lock().unwrap().toggle()
}

/// Current mode as seen by the component tree.
pub fn current_appearance() -> AppearanceMode {
    *CURRENT_MODE.read()
}

/// Themed root wrapper: applies the document-level `data-theme` attribute
/// that every styling rule keys off.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let mode = *CURRENT_MODE.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{mode.css_value()}",
            {children}
        }
    }
}

/// Sun/moon button that toggles the appearance mode.
#[component]
pub fn ThemeToggle() -> Element {
    let mode = *CURRENT_MODE.read();
    let glyph = match mode {
        AppearanceMode::Light => "\u{263E}",
        AppearanceMode::Dark => "\u{2600}",
    };
    let title = format!("Switch to {} mode", mode.toggled().display_name());

    rsx! {
        button {
            class: "theme-toggle",
            title: "{title}",
            onclick: move |_| {
                toggle_appearance();
            },
            "{glyph}"
        }
    }
}
