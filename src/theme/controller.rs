//! Session-scoped holder of the current color scheme.

use tracing::debug;

use super::store::{PreferenceCookie, PreferenceStore};
use super::ColorScheme;

/// Owns the current [`ColorScheme`] and the store it is persisted to.
///
/// There is no unset state: the controller is always seeded with a
/// resolved value (see [`resolve_initial_scheme`](super::resolve_initial_scheme)).
#[derive(Debug, Clone)]
pub struct ColorSchemeController<S: PreferenceStore> {
    current: ColorScheme,
    store: S,
}

impl<S: PreferenceStore> ColorSchemeController<S> {
    pub fn new(initial: ColorScheme, store: S) -> Self {
        Self {
            current: initial,
            store,
        }
    }

    pub fn current(&self) -> ColorScheme {
        self.current
    }

    /// Set the scheme to `explicit`, or flip it when `None`.
    ///
    /// The new value is written to the store with a 30 day max-age and
    /// returned.
    pub fn toggle_or_set(&mut self, explicit: Option<ColorScheme>) -> ColorScheme {
        let next = explicit.unwrap_or_else(|| self.current.toggled());
        debug!("Color scheme {} -> {}", self.current, next);

        self.current = next;
        self.store.set(&PreferenceCookie::color_scheme(next.as_str()));
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store, e.g. to send its cookies on a response.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{resolve_initial_scheme, MemoryStore, COOKIE_MAX_AGE_SECS, COOKIE_NAME};

    fn controller(initial: ColorScheme) -> ColorSchemeController<MemoryStore> {
        ColorSchemeController::new(initial, MemoryStore::new())
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut ctl = controller(ColorScheme::Light);

        assert_eq!(ctl.toggle_or_set(None), ColorScheme::Dark);
        assert_eq!(ctl.current(), ColorScheme::Dark);

        assert_eq!(ctl.toggle_or_set(None), ColorScheme::Light);
        assert_eq!(ctl.current(), ColorScheme::Light);
    }

    #[test]
    fn test_explicit_set_is_idempotent() {
        let mut ctl = controller(ColorScheme::Light);

        ctl.toggle_or_set(Some(ColorScheme::Dark));
        assert_eq!(ctl.current(), ColorScheme::Dark);

        ctl.toggle_or_set(Some(ColorScheme::Dark));
        assert_eq!(ctl.current(), ColorScheme::Dark);
    }

    #[test]
    fn test_current_has_no_side_effects() {
        let ctl = controller(ColorScheme::Dark);
        assert_eq!(ctl.current(), ColorScheme::Dark);
        assert_eq!(ctl.store().get(COOKIE_NAME), None);
    }

    #[test]
    fn test_toggle_from_dark_persists_light_for_thirty_days() {
        let mut ctl = ColorSchemeController::new(
            ColorScheme::Dark,
            MemoryStore::with_value(COOKIE_NAME, "dark"),
        );

        assert_eq!(ctl.toggle_or_set(None), ColorScheme::Light);
        assert_eq!(ctl.store().get(COOKIE_NAME), Some("light".to_string()));
        assert_eq!(ctl.store().max_age(COOKIE_NAME), Some(COOKIE_MAX_AGE_SECS));
    }

    #[test]
    fn test_next_request_sees_persisted_value() {
        for explicit in [ColorScheme::Light, ColorScheme::Dark] {
            let mut ctl = controller(explicit.toggled());
            ctl.toggle_or_set(Some(explicit));

            let store = ctl.into_store();
            assert_eq!(resolve_initial_scheme(&store), explicit);
        }
    }
}
