//! Browser navigation.
use crate::{Error, Result};
use yew::prelude::*;

/// Performs a full page navigation to `path`.
pub fn browser_navigate(path: &str) -> Result {
    let wnd = web_sys::window().ok_or(Error::Window)?;
    wnd.location().set_href(path)?;
    Ok(())
}

/// Navigation capability backed by [`browser_navigate`].
/// Failures are logged.
pub fn browser_navigator() -> Callback<AttrValue> {
    Callback::from(|path: AttrValue| {
        tracing::info!(%path, "navigating");
        if let Err(err) = browser_navigate(&path) {
            tracing::error!(?err, %path, "could not navigate");
        }
    })
}
