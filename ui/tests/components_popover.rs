#![cfg(target_arch = "wasm32")]
//! Tests for `components/popover` and `components/glyph`.
mod common;

use common::*;
use profile_ui::components::glyph::GlyphProps;
use profile_ui::components::popover::PopoverProps;
use profile_ui::components::{Glyph, GlyphName, Popover};
use profile_ui::types::Placement;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;
use yew::prelude::*;
wasm_bindgen_test_configure!(run_in_browser);

// ***************
// *** Popover ***
// ***************

fn popover_props(is_open: bool, onclose: Callback<MouseEvent>) -> PopoverProps {
    PopoverProps {
        is_open,
        onclose,
        placement: Placement::TopLeft,
        content: html! { <p class="content">{ "content" }</p> },
        class: Classes::new(),
        children: Children::new(vec![html! { <span class="anchor" /> }]),
    }
}

#[wasm_bindgen_test]
async fn closed_popover_should_render_anchor_only() {
    let root = create_root();
    let props = popover_props(false, Callback::noop());
    yew::Renderer::<Popover>::with_root_and_props(root.clone(), props).render();
    settle().await;

    assert!(query(&root, ".anchor").is_some());
    assert!(query(&root, ".content").is_none());
    assert!(query(&root, ".popover-backdrop").is_none());
}

#[wasm_bindgen_test]
async fn open_popover_should_report_outside_clicks() {
    let root = create_root();
    let closed = Rc::new(Cell::new(0));
    let onclose = {
        let closed = closed.clone();
        Callback::from(move |_: MouseEvent| closed.set(closed.get() + 1))
    };

    let props = popover_props(true, onclose);
    yew::Renderer::<Popover>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let wrapper = query(&root, ".profile-ui-popover").expect("wrapper should exist");
    assert_eq!(Some("top-left".to_string()), wrapper.get_attribute("data-placement"));
    let class = wrapper.get_attribute("class").unwrap_or_default();
    assert!(class.split_whitespace().any(|c| c == "open"), "{class}");
    assert!(query(&root, ".content").is_some());

    click(&root, ".content");
    settle().await;
    assert_eq!(0, closed.get(), "clicks inside the content should not close");

    click(&root, ".popover-backdrop");
    settle().await;
    assert_eq!(1, closed.get());
}

// *************
// *** Glyph ***
// *************

#[wasm_bindgen_test]
async fn glyph_should_render_by_name_with_color() {
    let root = create_root();
    let props = GlyphProps {
        name: GlyphName::Logout,
        color: Some("white".into()),
        size: "16".into(),
        class: Classes::new(),
    };

    yew::Renderer::<Glyph>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let glyph = query(&root, ".profile-ui-glyph").expect("glyph should exist");
    assert_eq!(Some("logout".to_string()), glyph.get_attribute("data-glyph"));
    let style = glyph.get_attribute("style").unwrap_or_default();
    assert!(style.contains("color: white"), "{style}");
    assert!(query(&root, "svg").is_some(), "icon should render");
}
