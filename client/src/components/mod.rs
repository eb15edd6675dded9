//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components provide and consume the shared `ThemeContext` and emit the
//! pre-hydration script into the document head.

pub mod theme_provider;
pub mod theme_script;
pub mod theme_toggle;
