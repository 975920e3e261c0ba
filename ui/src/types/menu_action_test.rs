use super::*;
use crate::constants::LOGOUT_PATH;

#[test]
fn placeholder_should_not_navigate() {
    let action = MenuAction::Placeholder;
    assert_eq!("#", action.href().as_str());
    assert_eq!(None, action.destination());
}

#[test]
fn navigate_should_link_to_destination() {
    let action = MenuAction::Navigate(LOGOUT_PATH.into());
    assert_eq!(LOGOUT_PATH, action.href().as_str());
    assert_eq!(Some(&AttrValue::from(LOGOUT_PATH)), action.destination());
}
