//! Root application component.

use dioxus::prelude::*;

use folio_ui::{initialize_appearance, ThemedRoot};

use super::{About, Contact, Education, Experience, Header, Hero, Projects, Skills};

/// Root component: themed shell wrapping the fixed header and the
/// portfolio sections in scroll order.
#[component]
pub fn App() -> Element {
    // Seed the appearance signal from the persisted preference once.
    use_hook(initialize_appearance);

    rsx! {
        ThemedRoot {
            Header {}

            main {
                Hero {}
                About {}
                Skills {}
                Projects {}
                Experience {}
                Education {}
                Contact {}
            }
        }
    }
}
