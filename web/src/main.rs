//! Web host for the account dropdown.
mod app;
mod constants;

use constants::{APP_ROOT_ID, MAX_LOG_LEVEL};
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_web::{performance_layer, MakeConsoleWriter};

fn main() {
    // logging setup
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .with_timer(UtcTime::rfc_3339()) // std::time is not available in browsers
        .with_writer(MakeConsoleWriter) // write events to the console
        .with_filter(MAX_LOG_LEVEL);

    let perf_layer = performance_layer()
        .with_details_from_fields(Pretty::default())
        .with_filter(MAX_LOG_LEVEL);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .init();

    let root = web_sys::window()
        .and_then(|wnd| wnd.document())
        .and_then(|document| document.get_element_by_id(APP_ROOT_ID));

    match root {
        Some(root) => yew::Renderer::<app::App>::with_root(root).render(),
        None => {
            tracing::warn!(id = APP_ROOT_ID, "root element not found, mounting on body");
            yew::Renderer::<app::App>::new().render()
        }
    };
}
