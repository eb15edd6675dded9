//! Narrow capability ports for the browser globals the theme protocol touches.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persisted preference, the system color-scheme signal, and the document
//! root attribute are externally owned. Resolution, bootstrap, and the holder
//! only see them through these traits, bundled per environment in a [`Host`].
//! The `client` crate provides `web-sys` implementations; the in-memory
//! implementations below back the tests and any non-browser embedding.
//!
//! TRADE-OFFS
//! ==========
//! Ports take `&self` and use interior mutability. Everything runs on one
//! thread, so the fakes use `Rc<RefCell<..>>` and a `Host` is not `Send`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{STORAGE_KEY, THEME_ATTRIBUTE, Theme};

#[cfg(test)]
#[path = "port_test.rs"]
mod port_test;

/// Failure reading or writing the persisted-preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached at all (disabled, blocked, absent).
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
    /// The store rejected a write (quota exceeded, read-only).
    #[error("preference store rejected write: {0}")]
    Write(String),
}

/// Failure stamping the document root attribute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("document root element not available")]
    MissingRoot,
    #[error("root attribute write rejected: {0}")]
    Rejected(String),
}

/// Synchronous client-local key-value store.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read-only "prefers dark color scheme" signal.
pub trait SchemeSignal {
    /// `Some(true)` when dark is preferred, `None` when the signal can't be read.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Write-only attribute sink on the document root element.
pub trait RootAttribute {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError>;
}

/// The ports available in one execution environment.
///
/// Any port may be missing: a server pre-render pass has none of them, and a
/// browser with storage disabled has a signal and a root but no store.
#[derive(Default)]
pub struct Host {
    store: Option<Box<dyn PreferenceStore>>,
    signal: Option<Box<dyn SchemeSignal>>,
    root: Option<Box<dyn RootAttribute>>,
}

impl Host {
    /// A host with no ports, as seen during server rendering.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    #[must_use]
    pub fn with_signal(mut self, signal: impl SchemeSignal + 'static) -> Self {
        self.signal = Some(Box::new(signal));
        self
    }

    #[must_use]
    pub fn with_root(mut self, root: impl RootAttribute + 'static) -> Self {
        self.root = Some(Box::new(root));
        self
    }

    /// True when no port is wired.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.store.is_none() && self.signal.is_none() && self.root.is_none()
    }

    /// Raw persisted preference. Store failures read as absent.
    #[must_use]
    pub fn stored_preference(&self) -> Option<String> {
        let store = self.store.as_deref()?;
        match store.load(STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %err, "theme preference unreadable; treating as absent");
                None
            }
        }
    }

    /// System color-scheme signal, `None` when unreadable or unwired.
    #[must_use]
    pub fn prefers_dark(&self) -> Option<bool> {
        self.signal.as_deref().and_then(|signal| signal.prefers_dark())
    }

    /// Set the root theme attribute.
    pub fn stamp(&self, theme: Theme) -> Result<(), DomError> {
        let root = self.root.as_deref().ok_or(DomError::MissingRoot)?;
        root.set_attribute(THEME_ATTRIBUTE, theme.as_str())
    }

    /// Write `theme` to the persisted-preference store.
    pub fn persist(&self, theme: Theme) -> Result<(), StoreError> {
        let store = self
            .store
            .as_deref()
            .ok_or_else(|| StoreError::Unavailable("no preference store".to_owned()))?;
        store.save(STORAGE_KEY, theme.as_str())
    }

    /// Apply a newly chosen theme: stamp the root, then persist.
    ///
    /// The stamp is best-effort and never blocks the write. Only the
    /// persistence outcome is reported.
    pub fn commit(&self, theme: Theme) -> Result<(), StoreError> {
        if let Err(err) = self.stamp(theme) {
            tracing::debug!(error = %err, %theme, "theme attribute not applied");
        }
        self.persist(theme)
    }
}

/// In-memory [`PreferenceStore`]. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    failing: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every read and write, like disabled `localStorage`.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// A store pre-seeded with `value` under `key`.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }

    /// Current value under `key`, bypassing the failure mode.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.failing {
            return Err(StoreError::Unavailable("storage disabled".to_owned()));
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Write("quota exceeded".to_owned()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// [`SchemeSignal`] with a fixed answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedSignal(pub Option<bool>);

impl FixedSignal {
    #[must_use]
    pub fn dark() -> Self {
        Self(Some(true))
    }

    #[must_use]
    pub fn light() -> Self {
        Self(Some(false))
    }

    #[must_use]
    pub fn unreadable() -> Self {
        Self(None)
    }
}

impl SchemeSignal for FixedSignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// [`RootAttribute`] that records every write. Clones share the log.
#[derive(Clone, Debug, Default)]
pub struct RecordingRoot {
    writes: Rc<RefCell<Vec<(String, String)>>>,
    rejecting: bool,
}

impl RecordingRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A root that rejects every write.
    #[must_use]
    pub fn rejecting() -> Self {
        Self {
            rejecting: true,
            ..Self::default()
        }
    }

    /// Every accepted `(name, value)` write, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }

    /// Most recent value written to `name`.
    #[must_use]
    pub fn last(&self, name: &str) -> Option<String> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }
}

impl RootAttribute for RecordingRoot {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        if self.rejecting {
            return Err(DomError::Rejected(format!("{name}={value}")));
        }
        self.writes
            .borrow_mut()
            .push((name.to_owned(), value.to_owned()));
        Ok(())
    }
}
