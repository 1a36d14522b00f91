//! Dioxus application root.
//!
//! The same component tree is rendered to HTML on the server (see
//! [`crate::ssr`]) and mounted in the browser by the WASM client.

use dioxus::prelude::*;

pub mod components;
pub mod pages;

use crate::theme::{resolve_initial_scheme, ColorScheme, PlatformStore};
use components::{AppShell, ColorSchemeProvider};
use pages::Home;

#[derive(Props, Clone, PartialEq)]
pub struct AppProps {
    /// Scheme resolved for this request
    pub initial_scheme: ColorScheme,
}

/// Root app component: color scheme context, shell, page.
#[component]
pub fn App(props: AppProps) -> Element {
    rsx! {
        ColorSchemeProvider { initial: props.initial_scheme,
            AppShell {
                Home {}
            }
        }
    }
}

/// Browser entry point: resolves the preference from `document.cookie`.
#[component]
pub fn ClientApp() -> Element {
    let initial_scheme = use_hook(|| resolve_initial_scheme(&PlatformStore::default()));

    rsx! {
        App { initial_scheme }
    }
}

/// Remove the server-rendered markup from `#main` so the client tree
/// mounts into an empty root.
pub fn clear_server_markup() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
        {
            root.set_inner_html("");
        }
    }
}
