//! Color scheme context and toggle button.
//!
//! [`ColorSchemeProvider`] owns a [`ColorSchemeController`] in a signal and
//! shares it with every descendant. Descendants go through
//! [`use_color_scheme`]; none of them touch the cookie store directly.

use dioxus::prelude::*;

use crate::theme::{global_styles, ColorScheme, ColorSchemeController, PlatformStore};

/// Color scheme state shared with descendant components.
#[derive(Clone, Copy)]
pub struct ColorSchemeContext {
    controller: Signal<ColorSchemeController<PlatformStore>>,
}

impl ColorSchemeContext {
    fn new(initial: ColorScheme) -> Self {
        Self {
            controller: Signal::new(ColorSchemeController::new(
                initial,
                PlatformStore::default(),
            )),
        }
    }

    /// Current scheme. Subscribes the calling component to changes.
    pub fn current(&self) -> ColorScheme {
        self.controller.read().current()
    }

    /// Set or flip the scheme, persisting it and re-rendering readers.
    pub fn toggle_or_set(&mut self, explicit: Option<ColorScheme>) -> ColorScheme {
        self.controller.write().toggle_or_set(explicit)
    }
}

/// Access the color scheme context installed by [`ColorSchemeProvider`].
pub fn use_color_scheme() -> ColorSchemeContext {
    use_context::<ColorSchemeContext>()
}

#[derive(Props, Clone, PartialEq)]
pub struct ColorSchemeProviderProps {
    /// Scheme resolved before the first render
    pub initial: ColorScheme,
    pub children: Element,
}

/// Installs the color scheme context for `children`.
#[component]
pub fn ColorSchemeProvider(props: ColorSchemeProviderProps) -> Element {
    let initial = props.initial;
    use_context_provider(move || ColorSchemeContext::new(initial));

    rsx! {
        {props.children}
    }
}

/// Global reset and body colours for the current scheme.
#[component]
pub fn GlobalStyles() -> Element {
    let scheme = use_color_scheme().current();
    let css = global_styles(scheme);

    rsx! {
        style { dangerous_inner_html: "{css}" }
    }
}

/// Sun/moon button flipping the color scheme.
#[component]
pub fn ColorSchemeToggle() -> Element {
    let mut ctx = use_color_scheme();

    let (icon, label) = match ctx.current() {
        ColorScheme::Dark => ("\u{2600}", "Switch to light mode"),
        ColorScheme::Light => ("\u{263E}", "Switch to dark mode"),
    };

    rsx! {
        button {
            class: "color-scheme-toggle",
            r#type: "button",
            title: label,
            aria_label: label,
            onclick: move |_| {
                ctx.toggle_or_set(None);
            },
            "{icon}"
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use crate::app::components::AppShell;
    use crate::theme::palette::{dark, pink};
    use crate::theme::{PreferenceStore, COOKIE_NAME};
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::Cell;

    thread_local! {
        static CAPTURED: Cell<Option<ColorSchemeContext>> = const { Cell::new(None) };
    }

    /// Hands the provider's context to the test body.
    #[component]
    fn CaptureContext() -> Element {
        let ctx = use_color_scheme();
        CAPTURED.with(|slot| slot.set(Some(ctx)));
        rsx! {}
    }

    #[component]
    fn Shell() -> Element {
        rsx! {
            ColorSchemeProvider { initial: ColorScheme::Light,
                CaptureContext {}
                AppShell {
                    p { "page" }
                }
            }
        }
    }

    #[test]
    fn test_toggle_updates_descendants_and_store() {
        let mut vdom = VirtualDom::new(Shell);
        vdom.rebuild_in_place();

        let before = dioxus_ssr::render(&vdom);
        assert!(before.contains(&format!("background-color:{}", pink::SHADE_2)));
        assert!(before.contains("Switch to dark mode"));

        let mut ctx = CAPTURED.with(Cell::get).expect("context provided");
        let next = vdom.in_runtime(|| ctx.toggle_or_set(None));
        assert_eq!(next, ColorScheme::Dark);
        assert_eq!(vdom.in_runtime(|| ctx.current()), ColorScheme::Dark);

        let stored = vdom.in_runtime(|| ctx.controller.read().store().get(COOKIE_NAME));
        assert_eq!(stored, Some("dark".to_string()));

        vdom.process_events();
        vdom.render_immediate(&mut NoOpMutations);

        let after = dioxus_ssr::render(&vdom);
        assert!(after.contains(&format!("background-color:{}", dark::SHADE_7)));
        assert!(after.contains("Switch to light mode"));
    }

    #[test]
    fn test_explicit_set_through_context_is_idempotent() {
        let mut vdom = VirtualDom::new(Shell);
        vdom.rebuild_in_place();

        let mut ctx = CAPTURED.with(Cell::get).expect("context provided");
        vdom.in_runtime(|| ctx.toggle_or_set(Some(ColorScheme::Light)));
        vdom.in_runtime(|| ctx.toggle_or_set(Some(ColorScheme::Light)));
        assert_eq!(vdom.in_runtime(|| ctx.current()), ColorScheme::Light);
    }
}
