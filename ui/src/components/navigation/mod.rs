//! Navigation components.
pub mod menu_entry;
pub mod profile_dropdown;

// Re-exports
pub use menu_entry::MenuEntry;
pub use profile_dropdown::ProfileDropdown;
