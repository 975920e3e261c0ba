//! Overlay anchored to its children.
use crate::types::Placement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PopoverProps {
    /// Whether the content is shown.
    pub is_open: bool,

    /// Called on a click outside of the content while open.
    #[prop_or(Callback::noop())]
    pub onclose: Callback<MouseEvent>,

    #[prop_or_default]
    pub placement: Placement,

    /// Content of the overlay.
    pub content: Html,

    #[prop_or_default]
    pub class: Classes,

    /// Anchor.
    #[prop_or_default]
    pub children: Children,
}

const WRAPPER_STYLE: &str = "
    position: relative;
    display: inline-block;
";

// Covers the viewport so outside clicks, including on the anchor, land here.
const BACKDROP_STYLE: &str = "
    position: fixed;
    top: 0;
    bottom: 0;
    left: 0;
    right: 0;
    z-index: 20;
    background: transparent;
";

const CONTENT_STYLE: &str = "
    position: absolute;
    z-index: 21;
";

#[function_component(Popover)]
pub fn popover(props: &PopoverProps) -> Html {
    let class = classes!(
        "profile-ui-popover",
        props.is_open.then_some("open"),
        props.class.clone()
    );

    let content_style = format!("{CONTENT_STYLE}{}", props.placement.style());

    html! {
        <div {class} style={WRAPPER_STYLE} data-placement={props.placement.as_str()}>
            { for props.children.iter() }

            if props.is_open {
                <>
                    <div class={classes!("popover-backdrop")}
                        style={BACKDROP_STYLE}
                        onclick={props.onclose.clone()}>
                    </div>

                    <div class={classes!("popover-content")} style={content_style}>
                        { props.content.clone() }
                    </div>
                </>
            }
        </div>
    }
}
