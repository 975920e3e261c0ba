//! What activating a menu entry does.
use crate::constants::PLACEHOLDER_HREF;
use yew::AttrValue;

#[derive(PartialEq, Clone, Debug)]
pub enum MenuAction {
    /// Inert entry. Activation does nothing.
    Placeholder,

    /// Full page navigation to the path.
    Navigate(AttrValue),
}

impl MenuAction {
    /// `href` attribute of the entry's anchor.
    pub fn href(&self) -> AttrValue {
        match self {
            Self::Placeholder => AttrValue::Static(PLACEHOLDER_HREF),
            Self::Navigate(path) => path.clone(),
        }
    }

    /// Navigation destination, if any.
    pub fn destination(&self) -> Option<&AttrValue> {
        match self {
            Self::Placeholder => None,
            Self::Navigate(path) => Some(path),
        }
    }
}

#[cfg(test)]
#[path = "./menu_action_test.rs"]
mod menu_action_test;
