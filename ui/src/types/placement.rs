//! Popover placement relative to its anchor.
use std::fmt;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Placement {
    /// Below the anchor, right edges aligned.
    #[default]
    BottomRight,

    /// Below the anchor, left edges aligned.
    BottomLeft,

    /// Above the anchor, right edges aligned.
    TopRight,

    /// Above the anchor, left edges aligned.
    TopLeft,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
        }
    }

    /// Inline positioning for content inside a `position: relative` wrapper.
    pub fn style(&self) -> &'static str {
        match self {
            Self::BottomRight => "top: 100%; right: 0;",
            Self::BottomLeft => "top: 100%; left: 0;",
            Self::TopRight => "bottom: 100%; right: 0;",
            Self::TopLeft => "bottom: 100%; left: 0;",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "./placement_test.rs"]
mod placement_test;
