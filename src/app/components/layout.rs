//! Shell layout wrapping every page: global styles, header, main area.

use dioxus::prelude::*;

use super::theme::{use_color_scheme, ColorSchemeToggle, GlobalStyles};
use crate::theme::Palette;

#[derive(Props, Clone, PartialEq)]
pub struct AppShellProps {
    /// Page content
    pub children: Element,
}

/// Header with brand mark and color scheme toggle, page content below.
#[component]
pub fn AppShell(props: AppShellProps) -> Element {
    let scheme = use_color_scheme().current();
    let header_style = Palette::for_scheme(scheme).header_style();

    rsx! {
        GlobalStyles {}
        header { class: "moon-header", style: "{header_style}",
            div { class: "moon-group",
                Brand {}
                ColorSchemeToggle {}
            }
        }
        main { class: "moon-main",
            {props.children}
        }
    }
}

/// Static brand mark linking home.
#[component]
fn Brand() -> Element {
    rsx! {
        a { class: "moon-brand", href: "/", aria_label: "Home",
            svg { width: "40", height: "40", view_box: "0 0 40 40", fill: "currentColor",
                path { d: "M26 4a16 16 0 1 0 10 28A13 13 0 0 1 26 4z" }
            }
        }
    }
}
