//! Persisted key-value storage for the color scheme preference.
//!
//! The preference lives in a cookie. On the server that is the request's
//! `CookieJar`, in the browser it is `document.cookie`. Writes are
//! fire-and-forget: a failed write is never surfaced to the caller.

use std::collections::HashMap;

use super::{COOKIE_MAX_AGE_SECS, COOKIE_NAME};

/// One cookie write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceCookie {
    pub name: String,
    pub value: String,
    pub max_age_secs: u64,
    pub path: &'static str,
}

impl PreferenceCookie {
    /// Cookie for the color scheme key with the standard 30 day lifetime.
    pub fn color_scheme(value: &str) -> Self {
        Self {
            name: COOKIE_NAME.to_string(),
            value: value.to_string(),
            max_age_secs: COOKIE_MAX_AGE_SECS,
            path: "/",
        }
    }

    /// Render as a `Set-Cookie` / `document.cookie` string.
    pub fn to_header_value(&self) -> String {
        format!(
            "{}={}; Path={}; Max-Age={}",
            self.name,
            urlencoding::encode(&self.value),
            self.path,
            self.max_age_secs
        )
    }
}

/// Key-value store the preference is persisted in.
pub trait PreferenceStore {
    /// Read a stored value. Absence is not an error.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Failures are swallowed.
    fn set(&mut self, cookie: &PreferenceCookie);
}

/// Look up `key` in a `Cookie` header or `document.cookie` string.
///
/// Values are percent-decoded; an undecodable value is returned raw.
pub fn cookie_value(header: &str, key: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == key)
        .map(|(_, value)| {
            let value = value.trim();
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredValue {
    value: String,
    max_age_secs: u64,
}

/// In-memory store. Used for server rendering and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, StoredValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one value (as if it arrived on a request).
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                max_age_secs: COOKIE_MAX_AGE_SECS,
            },
        );
        store
    }

    /// Max-age recorded by the last write to `key`.
    pub fn max_age(&self, key: &str) -> Option<u64> {
        self.entries.get(key).map(|v| v.max_age_secs)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value.clone())
    }

    fn set(&mut self, cookie: &PreferenceCookie) {
        self.entries.insert(
            cookie.name.clone(),
            StoredValue {
                value: cookie.value.clone(),
                max_age_secs: cookie.max_age_secs,
            },
        );
    }
}

#[cfg(feature = "server")]
impl PreferenceStore for axum_extra::extract::cookie::CookieJar {
    fn get(&self, key: &str) -> Option<String> {
        axum_extra::extract::cookie::CookieJar::get(self, key).map(|c| c.value().to_string())
    }

    fn set(&mut self, cookie: &PreferenceCookie) {
        use axum_extra::extract::cookie::Cookie;

        let max_age = i64::try_from(cookie.max_age_secs).unwrap_or(i64::MAX);
        let built = Cookie::build((cookie.name.clone(), cookie.value.clone()))
            .path(cookie.path)
            .max_age(time::Duration::seconds(max_age))
            .build();
        *self = self.clone().add(built);
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{cookie_value, PreferenceCookie, PreferenceStore};
    use wasm_bindgen::JsCast;

    /// `document.cookie` backed store.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DocumentCookieStore;

    fn html_document() -> Option<web_sys::HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    impl PreferenceStore for DocumentCookieStore {
        fn get(&self, key: &str) -> Option<String> {
            let raw = html_document()?.cookie().ok()?;
            cookie_value(&raw, key)
        }

        fn set(&mut self, cookie: &PreferenceCookie) {
            let Some(document) = html_document() else {
                return;
            };
            if let Err(e) = document.set_cookie(&cookie.to_header_value()) {
                tracing::debug!("Failed to write cookie {}: {:?}", cookie.name, e);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::DocumentCookieStore;

/// Store the UI persists through on this platform.
#[cfg(target_arch = "wasm32")]
pub type PlatformStore = DocumentCookieStore;

/// Store the UI persists through on this platform. Outside the browser
/// nothing can toggle, so writes stay in memory for the session.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = MemoryStore;
