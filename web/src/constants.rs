//! Constant values.
use tracing::level_filters::LevelFilter;

pub const MAX_LOG_LEVEL: LevelFilter = LevelFilter::DEBUG;

/// Id of the element the app is mounted on.
pub static APP_ROOT_ID: &str = "app";

pub static APP_TITLE: &str = "Dagster";
