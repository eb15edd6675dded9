//! Button that flips between light and dark.

use duskmode::Theme;
use leptos::prelude::*;

use crate::state::theme::use_theme;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Glyph for the theme a click would switch to.
pub fn toggle_glyph(current: Theme) -> &'static str {
    match current {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    }
}

/// Tooltip describing what a click does.
pub fn toggle_title(current: Theme) -> &'static str {
    match current {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    }
}

/// Glyph to render, withheld until the button has mounted on the client.
///
/// The server only knows the light fallback, and hydration keeps server text
/// as-is, so anything rendered before mount could disagree with the theme.
pub fn visible_glyph(mounted: bool, current: Theme) -> Option<&'static str> {
    mounted.then(|| toggle_glyph(current))
}

/// Tooltip to render, withheld until mount like [`visible_glyph`].
pub fn visible_title(mounted: bool, current: Theme) -> Option<&'static str> {
    mounted.then(|| toggle_title(current))
}

/// Theme toggle button. Must be rendered inside a `ThemeProvider`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                ctx.toggle();
            }
            title=move || visible_title(mounted.get(), ctx.theme())
        >
            {move || visible_glyph(mounted.get(), ctx.theme())}
        </button>
    }
}
