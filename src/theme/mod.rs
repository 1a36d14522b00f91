//! Color scheme preference model shared by the server and the WASM client.
//!
//! - [`ColorScheme`] - the light/dark preference
//! - [`store`] - persisted key-value storage (cookies)
//! - [`resolver`] - per-request initial preference lookup
//! - [`controller`] - the session-scoped preference holder
//! - [`palette`] - colours and global styles per scheme

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod controller;
pub mod palette;
pub mod resolver;
pub mod store;

pub use controller::ColorSchemeController;
pub use palette::{global_styles, Palette};
pub use resolver::resolve_initial_scheme;
pub use store::{cookie_value, MemoryStore, PlatformStore, PreferenceCookie, PreferenceStore};

/// Cookie holding the persisted preference.
pub const COOKIE_NAME: &str = "mantine-color-scheme";

/// Cookie lifetime: 30 days.
pub const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 30;

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite scheme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored value was neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color scheme: {0:?}")]
pub struct ParseColorSchemeError(pub String);

impl FromStr for ColorScheme {
    type Err = ParseColorSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseColorSchemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!("light".parse::<ColorScheme>(), Ok(ColorScheme::Light));
        assert_eq!("dark".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
    }

    #[test]
    fn test_parse_rejects_unknown_and_mixed_case() {
        assert!("Dark".parse::<ColorScheme>().is_err());
        assert!("".parse::<ColorScheme>().is_err());
        let err = "black".parse::<ColorScheme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown color scheme: \"black\"");
    }

    #[test]
    fn test_toggled_flips() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
    }

    #[test]
    fn test_serde_uses_lowercase_strings() {
        let json = serde_json::to_string(&ColorScheme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");

        let parsed: ColorScheme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ColorScheme::Light);
    }

    #[test]
    fn test_cookie_max_age_is_thirty_days() {
        assert_eq!(COOKIE_MAX_AGE_SECS, 2_592_000);
    }
}
