//! Single entry of a dropdown menu.
use crate::components::glyph::{Glyph, GlyphName};
use crate::types::MenuAction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MenuEntryProps {
    pub label: AttrValue,
    pub glyph: GlyphName,
    pub action: MenuAction,

    /// Receives the destination of [`MenuAction::Navigate`] entries.
    #[prop_or(Callback::noop())]
    pub onnavigate: Callback<AttrValue>,
}

#[function_component(MenuEntry)]
pub fn menu_entry(props: &MenuEntryProps) -> Html {
    let onclick = {
        let action = props.action.clone();
        let onnavigate = props.onnavigate.clone();

        Callback::from(move |e: MouseEvent| {
            // the anchor's own navigation would race an explicit redirect
            e.prevent_default();
            if let Some(destination) = action.destination() {
                onnavigate.emit(destination.clone());
            }
        })
    };

    html! {
        <a class={classes!("profile-ui-menu-entry")}
            href={props.action.href()}
            {onclick}>

            <Glyph name={props.glyph} />
            <span class={classes!("label")}>{ &props.label }</span>
        </a>
    }
}
