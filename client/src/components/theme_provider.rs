//! Context provider owning the in-memory theme.

use leptos::prelude::*;

use crate::state::theme::{HostFactory, ThemeContext};
use crate::util::dark_mode::browser_host;

/// Provides a [`ThemeContext`] to `children` and keeps `<html data-theme>`
/// in sync with it.
///
/// The initial theme is resolved once (light during SSR). On the client the
/// reconciliation effect runs on mount and after every change, overwriting
/// whatever the attribute held. `host` defaults to [`browser_host`].
#[component]
pub fn ThemeProvider(
    #[prop(optional)] host: Option<HostFactory>,
    children: Children,
) -> impl IntoView {
    let ctx = ThemeContext::new(host.unwrap_or(browser_host));
    provide_context(ctx);
    ctx.install_reconcile();

    children()
}
