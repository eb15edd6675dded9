//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the theme state can be exercised natively with in-memory ports.

pub mod dark_mode;
