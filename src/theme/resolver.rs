//! Initial preference lookup, run once per request before rendering.

use tracing::debug;

use super::store::PreferenceStore;
use super::{ColorScheme, COOKIE_NAME};

/// Read the persisted color scheme from `store`.
///
/// A missing value resolves to [`ColorScheme::Light`]. An unrecognised
/// value does too: stored strings are validated rather than trusted.
pub fn resolve_initial_scheme(store: &impl PreferenceStore) -> ColorScheme {
    let Some(raw) = store.get(COOKIE_NAME) else {
        return ColorScheme::default();
    };

    match raw.parse() {
        Ok(scheme) => scheme,
        Err(e) => {
            debug!("Ignoring stored preference: {}", e);
            ColorScheme::default()
        }
    }
}
