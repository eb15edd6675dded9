//! Reactive theme state shared through Leptos context.
//!
//! DESIGN
//! ======
//! The in-memory theme is an `RwSignal<Theme>` wrapped in a `Copy` handle so
//! any number of components can read it and toggle it. The handle also
//! carries the host factory it talks to, `browser_host` in the app and an
//! in-memory host in tests. Reconciliation is an effect installed by
//! `ThemeProvider`; toggling also stamps and persists synchronously through
//! [`Host::commit`], so the root attribute never lags behind a toggle.

use duskmode::{Host, Theme, resolve};
use leptos::prelude::*;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Builds the [`Host`] for the current environment.
pub type HostFactory = fn() -> Host;

/// Handle to the current theme and its toggle operation.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    host: HostFactory,
}

impl ThemeContext {
    /// Resolve the initial theme against `host()` and wrap it in a signal.
    pub fn new(host: HostFactory) -> Self {
        Self {
            theme: RwSignal::new(resolve(&host())),
            host,
        }
    }

    /// Current theme (tracked).
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Whether the current theme is dark (tracked).
    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    /// Read-only view of the theme signal.
    pub fn signal(&self) -> Signal<Theme> {
        self.theme.read_only().into()
    }

    /// Stamp the in-memory theme onto the root of `host`, without reading
    /// the attribute back.
    pub fn reconcile_with(&self, host: &Host) {
        stamp_root(host, self.theme.get_untracked());
    }

    /// Re-stamp the root now and after every change of the theme signal.
    ///
    /// Effects only run on the client, so this is a no-op during SSR.
    pub fn install_reconcile(self) {
        Effect::new(move || {
            let theme = self.theme.get();
            stamp_root(&(self.host)(), theme);
        });
    }

    /// Toggle against this context's host.
    pub fn toggle(&self) -> Theme {
        self.toggle_with(&(self.host)())
    }

    /// Flip the theme, then stamp and persist it through `host`.
    ///
    /// A failed write is logged; the new theme stays applied in memory and on
    /// the document root.
    pub fn toggle_with(&self, host: &Host) -> Theme {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        if let Err(err) = host.commit(next) {
            log::warn!("theme set to {next} but not persisted: {err}");
        }
        next
    }
}

fn stamp_root(host: &Host, theme: Theme) {
    if let Err(err) = host.stamp(theme) {
        log::debug!("theme reconcile skipped: {err}");
    }
}

/// Theme context from the nearest `ThemeProvider`.
///
/// # Panics
///
/// Panics when no `ThemeProvider` is an ancestor of the calling component.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Theme context from the nearest `ThemeProvider`, if any.
pub fn try_use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}
