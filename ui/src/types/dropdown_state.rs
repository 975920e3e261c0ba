//! Open state of a dropdown.
use std::rc::Rc;
use yew::prelude::*;

/// User interactions that drive a [`DropdownState`].
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum DropdownAction {
    /// The toggle button was activated.
    Toggle,

    /// The user signaled intent to dismiss the menu surface.
    Dismiss,
}

/// Open state of a dropdown.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

impl DropdownState {
    /// Whether the menu surface should be visible.
    pub fn expanded(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// State after applying `action`.
    pub fn next(self, action: DropdownAction) -> Self {
        match (self, action) {
            (Self::Closed, DropdownAction::Toggle) => Self::Open,
            (Self::Open, DropdownAction::Toggle) => Self::Closed,
            (_, DropdownAction::Dismiss) => Self::Closed,
        }
    }
}

impl Reducible for DropdownState {
    type Action = DropdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).next(action);
        if next == *self {
            return self;
        }

        tracing::debug!(from = ?*self, to = ?next, ?action, "dropdown transition");
        next.into()
    }
}

#[cfg(test)]
#[path = "./dropdown_state_test.rs"]
mod dropdown_state_test;
