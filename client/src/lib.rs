//! # duskmode-client
//!
//! Leptos bindings for `duskmode`: a `ThemeProvider` that owns the in-memory
//! theme, the `use_theme` hook, a `ThemeToggle` button, and head components
//! that run the bootstrap script before hydration.
//!
//! Build with `hydrate` for the browser (wires `web-sys` ports) and with
//! `ssr` for server rendering (detached host, light by default).

pub mod components;
pub mod state;
pub mod util;

pub use components::theme_provider::ThemeProvider;
pub use components::theme_script::{ThemeScript, ThemeScriptLink};
pub use components::theme_toggle::ThemeToggle;
pub use state::theme::{HostFactory, ThemeContext, try_use_theme, use_theme};
pub use util::dark_mode::browser_host;

/// Stamp the resolved theme from JS, e.g. from a module script loaded early.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = bootstrapTheme)]
pub fn bootstrap_theme() {
    duskmode::bootstrap(&browser_host());
}

/// Install the panic hook and route `log` output to the browser console.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = initThemeLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("console logger not installed: {err}");
    }
}
