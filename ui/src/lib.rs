//! Account dropdown for the web UI header.
pub mod components;
pub mod constants;
pub mod error;
pub mod navigate;
pub mod styles;
pub mod types;

// Re-exports
pub use components::navigation::ProfileDropdown;
pub use error::{Error, Result};
