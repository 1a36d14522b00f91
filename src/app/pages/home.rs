//! Landing page.

use dioxus::prelude::*;

use crate::app::components::use_color_scheme;

#[component]
pub fn Home() -> Element {
    let scheme = use_color_scheme().current();

    rsx! {
        section { id: "home",
            h1 { "Welcome" }
            p { "Showing the {scheme} color scheme. Use the button in the header to switch." }
        }
    }
}
