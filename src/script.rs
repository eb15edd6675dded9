//! Freestanding pre-hydration script.
//!
//! [`render`] emits the bootstrap routine as a dependency-free IIFE built from
//! the same constants and theme names as [`crate::resolve`], so the inline
//! `<script>` and the installed `theme-init.js` cannot drift from the Rust
//! resolution order. Every browser access is wrapped in `try/catch`; the
//! script never throws and never writes the preference store.

use serde_json::Value;

use crate::{COLOR_SCHEME_QUERY, STORAGE_KEY, THEME_ATTRIBUTE, Theme};

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

/// File name of the installed artifact.
pub const SCRIPT_FILE_NAME: &str = "theme-init.js";

/// Encode `s` as a JS string literal (JSON strings are valid JS).
fn js_literal(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

/// Render the bootstrap script body.
#[must_use]
pub fn render() -> String {
    let key = js_literal(STORAGE_KEY);
    let attribute = js_literal(THEME_ATTRIBUTE);
    let query = js_literal(COLOR_SCHEME_QUERY);
    let light = js_literal(Theme::Light.as_str());
    let dark = js_literal(Theme::Dark.as_str());

    format!(
        r"(function () {{
  try {{
    var theme = null;
    try {{
      theme = window.localStorage.getItem({key});
    }} catch (e) {{}}
    if (theme !== {light} && theme !== {dark}) {{
      var prefersDark = false;
      try {{
        prefersDark = !!(window.matchMedia && window.matchMedia({query}).matches);
      }} catch (e) {{}}
      theme = prefersDark ? {dark} : {light};
    }}
    document.documentElement.setAttribute({attribute}, theme);
  }} catch (e) {{}}
}})();
"
    )
}
