//! Browser ports for the theme protocol.
//!
//! Wires `localStorage`, the `prefers-color-scheme` media query, and
//! `<html data-theme>` into a [`Host`]. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Ports look up `window` on every call instead of caching handles, so they
//! stay zero-sized and a [`Host`] can be built cheaply wherever one is needed.
//! SSR builds get a detached host and resolve to light.

use duskmode::Host;

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Host for the current execution environment.
///
/// Detached outside the browser (SSR, native tests) or when `window` is
/// missing, e.g. inside a worker.
pub fn browser_host() -> Host {
    #[cfg(feature = "hydrate")]
    {
        if web_sys::window().is_none() {
            return Host::detached();
        }
        Host::detached()
            .with_store(web::LocalStorage)
            .with_signal(web::ColorScheme)
            .with_root(web::DocumentRoot)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Host::detached()
    }
}

#[cfg(feature = "hydrate")]
mod web {
    use duskmode::{
        COLOR_SCHEME_QUERY, DomError, PreferenceStore, RootAttribute, SchemeSignal, StoreError,
    };
    use wasm_bindgen::JsValue;

    fn describe(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StoreError::Unavailable("localStorage missing".to_owned())),
            Err(err) => Err(StoreError::Unavailable(describe(&err))),
        }
    }

    /// `window.localStorage`.
    pub(super) struct LocalStorage;

    impl PreferenceStore for LocalStorage {
        fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
            storage()?
                .get_item(key)
                .map_err(|err| StoreError::Unavailable(describe(&err)))
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
            storage()?
                .set_item(key, value)
                .map_err(|err| StoreError::Write(describe(&err)))
        }
    }

    /// `window.matchMedia("(prefers-color-scheme: dark)")`.
    pub(super) struct ColorScheme;

    impl SchemeSignal for ColorScheme {
        fn prefers_dark(&self) -> Option<bool> {
            let query = web_sys::window()?.match_media(COLOR_SCHEME_QUERY).ok()??;
            Some(query.matches())
        }
    }

    /// `document.documentElement`.
    pub(super) struct DocumentRoot;

    impl RootAttribute for DocumentRoot {
        fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
                .ok_or(DomError::MissingRoot)?;
            root.set_attribute(name, value)
                .map_err(|err| DomError::Rejected(describe(&err)))
        }
    }
}
