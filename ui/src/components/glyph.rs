//! Icon rendered by symbolic name.
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GlyphName {
    AccountCircle,
    Logout,
}

impl GlyphName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountCircle => "account_circle",
            Self::Logout => "logout",
        }
    }

    fn icon_id(&self) -> IconId {
        match self {
            Self::AccountCircle => IconId::BootstrapPersonCircle,
            Self::Logout => IconId::BootstrapBoxArrowRight,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub name: GlyphName,

    /// Overrides the inherited text color.
    #[prop_or_default]
    pub color: Option<AttrValue>,

    /// Width and height of the icon.
    #[prop_or(AttrValue::Static("16"))]
    pub size: AttrValue,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    let class = classes!("profile-ui-glyph", props.class.clone());
    let style = match props.color.as_ref() {
        Some(color) => format!("display: inline-flex; color: {color};"),
        None => "display: inline-flex;".to_string(),
    };

    html! {
        <span {class} {style} data-glyph={props.name.as_str()}>
            <Icon
                icon_id={props.name.icon_id()}
                width={props.size.clone()}
                height={props.size.clone()} />
        </span>
    }
}
