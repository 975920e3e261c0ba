//! Browser test helpers.
#![allow(dead_code)]
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, MouseEventInit};
use yew::prelude::*;

/// Records requested navigations.
pub type NavigationLog = Rc<RefCell<Vec<AttrValue>>>;

pub fn navigation_recorder() -> (Callback<AttrValue>, NavigationLog) {
    let log = NavigationLog::default();
    let navigate = {
        let log = log.clone();
        Callback::from(move |path: AttrValue| {
            log.borrow_mut().push(path);
        })
    };

    (navigate, log)
}

/// Creates a fresh element attached to the document body.
pub fn create_root() -> Element {
    let document = web_sys::window()
        .expect("window not found")
        .document()
        .expect("window should have a document");

    let root = document
        .create_element("div")
        .expect("could not create root");

    document
        .body()
        .expect("document should have a body")
        .append_child(&root)
        .expect("could not attach root");

    root
}

/// Lets the renderer flush pending updates.
pub async fn settle() {
    yew::platform::time::sleep(Duration::ZERO).await;
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector)
        .expect("selector should be valid")
}

pub fn click(root: &Element, selector: &str) {
    query(root, selector)
        .expect("element should exist")
        .dyn_into::<HtmlElement>()
        .expect("element should be an html element")
        .click();
}

/// Dispatches a cancelable click on `element`.
/// Returns whether the default action was prevented.
pub fn click_cancelable(element: &Element) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init)
        .expect("could not create event");

    let not_canceled = element
        .dispatch_event(&event)
        .expect("could not dispatch event");

    !not_canceled
}
