//! Constant values.

/// Path the browser is sent to when the user logs out.
/// The host's backend must serve this route.
pub static LOGOUT_PATH: &str = "/logout";

/// Non-navigating link target for entries without a destination.
pub static PLACEHOLDER_HREF: &str = "#";

pub static PROFILE_LABEL: &str = "My Profile";
pub static LOGOUT_LABEL: &str = "Logout";

/// Color of the toggle button glyph, for display on a dark header.
pub static TOGGLE_GLYPH_COLOR: &str = "white";
