//! Common types.
pub mod dropdown_state;
pub mod menu_action;
pub mod placement;

// Re-exports
pub use dropdown_state::{DropdownAction, DropdownState};
pub use menu_action::MenuAction;
pub use placement::Placement;
