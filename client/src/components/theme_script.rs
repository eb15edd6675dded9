//! Pre-hydration `<script>` elements.
//!
//! Place one of these in the document head, before `HydrationScripts`, so the
//! root attribute is set before first paint.

use duskmode::script::{self, SCRIPT_FILE_NAME};
use leptos::prelude::*;

/// Inline bootstrap script rendered from [`script::render`].
#[component]
pub fn ThemeScript() -> impl IntoView {
    view! { <script inner_html=script::render()></script> }
}

/// Blocking reference to the installed `theme-init.js`.
///
/// `src` defaults to `/theme-init.js`, where `duskmode install` puts it.
#[component]
pub fn ThemeScriptLink(#[prop(optional, into)] src: Option<String>) -> impl IntoView {
    let src = src.unwrap_or_else(|| format!("/{SCRIPT_FILE_NAME}"));
    view! { <script src=src></script> }
}
