//! # duskmode
//!
//! Light/dark theme resolution and synchronization for Rust web UIs.
//!
//! The crate owns the protocol shared by every packaging of the theme logic:
//! the two-valued [`Theme`], the resolution order (persisted choice, then the
//! system color-scheme signal, then light), the pre-paint [`bootstrap`]
//! routine, the framework-neutral [`ThemeHolder`], the freestanding JS
//! artifact rendered by [`script::render`], and the install-time copy step.
//!
//! Browser globals are reached only through the narrow traits in [`port`],
//! bundled per environment in a [`Host`]. The Leptos bindings live in the
//! `duskmode-client` crate.

pub mod holder;
pub mod install;
pub mod port;
pub mod resolve;
pub mod script;
pub mod theme;

pub use holder::{ThemeHolder, Toggled};
pub use install::{InstallError, InstallOptions, install};
pub use port::{DomError, Host, PreferenceStore, RootAttribute, SchemeSignal, StoreError};
pub use resolve::{bootstrap, resolve, resolve_from};
pub use theme::{ParseThemeError, Theme};

/// Key under which the explicit user choice is persisted.
pub const STORAGE_KEY: &str = "duskmode-theme";

/// Attribute stamped on the document root element for CSS selectors.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query reporting whether the system prefers a dark color scheme.
pub const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
