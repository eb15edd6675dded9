//! Framework-neutral runtime theme holder.
//!
//! DESIGN
//! ======
//! The holder owns the in-memory theme for as long as it lives. It resolves
//! once on creation, then every toggle updates memory, the root attribute,
//! and the preference store in that order. The Leptos provider in the
//! `client` crate follows the same sequence through [`Host::commit`].

use crate::{Host, StoreError, Theme, resolve};

#[cfg(test)]
#[path = "holder_test.rs"]
mod holder_test;

/// Result of [`ThemeHolder::toggle`].
///
/// Memory and the root attribute are always updated; `persisted` reports
/// whether the new value also reached the store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Toggled {
    pub theme: Theme,
    pub persisted: Result<(), StoreError>,
}

/// In-memory theme plus the host it keeps in sync.
pub struct ThemeHolder {
    theme: Theme,
    host: Host,
}

impl ThemeHolder {
    /// Resolve the initial theme against `host`.
    ///
    /// A detached host (server pre-render) resolves to light without
    /// touching anything; call [`reconcile`](Self::reconcile) once real
    /// ports are available.
    #[must_use]
    pub fn new(host: Host) -> Self {
        let theme = resolve(&host);
        Self { theme, host }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    #[must_use]
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Swap in a new environment, e.g. after hydration. The in-memory theme
    /// is kept; follow with [`reconcile`](Self::reconcile).
    pub fn set_host(&mut self, host: Host) {
        self.host = host;
    }

    #[must_use]
    pub fn into_host(self) -> Host {
        self.host
    }

    /// Re-stamp the root attribute with the in-memory theme, without reading
    /// it back first.
    pub fn reconcile(&self) {
        if let Err(err) = self.host.stamp(self.theme) {
            tracing::debug!(error = %err, theme = %self.theme, "theme reconcile skipped");
        }
    }

    /// Flip the theme, apply it to the root, and persist it.
    pub fn toggle(&mut self) -> Toggled {
        let next = self.theme.toggled();
        self.theme = next;
        let persisted = self.host.commit(next);
        if let Err(err) = &persisted {
            tracing::warn!(error = %err, theme = %next, "theme toggled but not persisted");
        }
        Toggled {
            theme: next,
            persisted,
        }
    }
}
