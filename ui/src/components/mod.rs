//! UI Components
pub mod glyph;
pub mod navigation;
pub mod popover;

// Re-exports
pub use glyph::{Glyph, GlyphName};
pub use popover::Popover;
