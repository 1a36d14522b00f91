//! Server-side rendering of the full HTML document.
//!
//! The page is rendered once on the server for the request's color scheme,
//! then the WASM client (built with `--no-default-features --features web`
//! and `wasm-bindgen --target web --out-name moon_shell`) is loaded from
//! `/assets` and takes over `#main`.

use dioxus::prelude::*;

use crate::app::App;
use crate::theme::ColorScheme;

const VIEWPORT: &str = "minimum-scale=1, initial-scale=1, width=device-width";
const FAVICON: &str = "/favicon.svg?v=4";

/// wasm-bindgen JS glue of the client bundle.
pub const CLIENT_SCRIPT: &str = "/assets/moon_shell.js";
/// Compiled client module.
pub const CLIENT_WASM: &str = "/assets/moon_shell_bg.wasm";

#[derive(Props, Clone, PartialEq)]
struct DocumentProps {
    title: String,
    initial_scheme: ColorScheme,
}

/// `<html>` root: head elements, server-rendered app, client loader.
#[component]
fn Document(props: DocumentProps) -> Element {
    let loader = format!(
        "import init from \"{CLIENT_SCRIPT}\"; init({{ module_or_path: \"{CLIENT_WASM}\" }});"
    );

    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{props.title}" }
            meta { name: "viewport", content: VIEWPORT }
            link { rel: "shortcut icon", href: FAVICON }
        }
        body {
            div { id: "main",
                App { initial_scheme: props.initial_scheme }
            }
            script { r#type: "module", dangerous_inner_html: "{loader}" }
        }
    }
}

/// Render the page for a resolved color scheme.
pub fn render_page(title: &str, initial_scheme: ColorScheme) -> String {
    let mut vdom = VirtualDom::new_with_props(
        Document,
        DocumentProps {
            title: title.to_string(),
            initial_scheme,
        },
    );
    vdom.rebuild_in_place();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\" data-color-scheme=\"{initial_scheme}\">{}</html>",
        dioxus_ssr::render(&vdom)
    )
}
