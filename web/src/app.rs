//! Main application.
use crate::constants::APP_TITLE;
use profile_ui::ProfileDropdown;
use yew::prelude::*;

const HEADER_STYLE: &str = "
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0 16px;
    height: 48px;
    background-color: #0f1216;
    color: white;
";

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <header class={classes!("app-header")} style={HEADER_STYLE}>
            <span class={classes!("app-title")}>{ APP_TITLE }</span>
            <ProfileDropdown />
        </header>
    }
}
