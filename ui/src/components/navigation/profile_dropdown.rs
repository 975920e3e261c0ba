//! Account dropdown.
//! A toggle button opening a menu with profile and logout entries.
use crate::components::glyph::{Glyph, GlyphName};
use crate::components::navigation::MenuEntry;
use crate::components::Popover;
use crate::constants::{LOGOUT_LABEL, LOGOUT_PATH, PROFILE_LABEL, TOGGLE_GLYPH_COLOR};
use crate::navigate::browser_navigator;
use crate::styles::PROFILE_DROPDOWN_CSS;
use crate::types::{DropdownAction, DropdownState, MenuAction, Placement};
use yew::prelude::*;

/// [`ProfileDropdown`] properties.
#[derive(Properties, PartialEq)]
pub struct ProfileDropdownProps {
    /// Navigation capability used on logout.
    #[prop_or_else(browser_navigator)]
    pub navigate: Callback<AttrValue>,

    #[prop_or_default]
    pub placement: Placement,

    #[prop_or_default]
    pub class: Classes,
}

/// Account dropdown.
/// Always rendered, independent of authentication state.
#[function_component(ProfileDropdown)]
pub fn profile_dropdown(props: &ProfileDropdownProps) -> Html {
    let state = use_reducer(DropdownState::default);

    let toggle = {
        let state = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(DropdownAction::Toggle);
        })
    };

    let onclose = {
        let state = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(DropdownAction::Dismiss);
        })
    };

    let class = classes!("profile-ui-dropdown", props.class.clone());
    let content = html! {
        <div class={classes!("profile-ui-dropdown-menu")}>
            <MenuEntry
                label={PROFILE_LABEL}
                glyph={GlyphName::AccountCircle}
                action={MenuAction::Placeholder} />

            <MenuEntry
                label={LOGOUT_LABEL}
                glyph={GlyphName::Logout}
                action={MenuAction::Navigate(LOGOUT_PATH.into())}
                onnavigate={props.navigate.clone()} />
        </div>
    };

    html! {
        <>
            <style>{ PROFILE_DROPDOWN_CSS }</style>
            <Popover {class}
                is_open={state.expanded()}
                {onclose}
                placement={props.placement}
                {content}>

                <button class={classes!("profile-ui-dropdown-toggle")}
                    type="button"
                    aria-expanded={state.expanded().to_string()}
                    onclick={toggle}>

                    <Glyph
                        name={GlyphName::AccountCircle}
                        color={AttrValue::Static(TOGGLE_GLYPH_COLOR)} />
                </button>
            </Popover>
        </>
    }
}
