//! Theme resolution and the pre-paint bootstrap routine.
//!
//! Resolution order, short-circuiting:
//! 1. a persisted preference that parses as a [`Theme`],
//! 2. [`Theme::Dark`] when the system prefers a dark color scheme,
//! 3. [`Theme::Light`].
//!
//! Store failures, invalid stored strings, and an unreadable signal each fall
//! through to the next step, so a host with no ports resolves to light.

use crate::{Host, Theme};

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

/// Resolve from already-read inputs.
#[must_use]
pub fn resolve_from(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(|raw| raw.parse::<Theme>().ok()) {
        return theme;
    }
    Theme::from_prefers_dark(prefers_dark.unwrap_or(false))
}

/// Resolve against the ports of `host`.
///
/// The system signal is only queried when no valid preference is stored.
#[must_use]
pub fn resolve(host: &Host) -> Theme {
    let stored = host.stored_preference();
    if let Some(theme) = stored.as_deref().and_then(|raw| raw.parse::<Theme>().ok()) {
        return theme;
    }
    if let Some(raw) = stored {
        tracing::debug!(value = %raw, "ignoring invalid stored theme");
    }
    resolve_from(None, host.prefers_dark())
}

/// Stamp the resolved theme onto the document root.
///
/// Safe to run any number of times. Never writes the preference store, so
/// until the user toggles, each load follows the current system preference.
/// A missing root or rejected write is logged and otherwise ignored.
pub fn bootstrap(host: &Host) {
    let theme = resolve(host);
    if let Err(err) = host.stamp(theme) {
        tracing::debug!(error = %err, %theme, "theme bootstrap skipped");
    }
}
