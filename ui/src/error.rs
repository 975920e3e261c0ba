//! Errors and results.
use std::result::Result as StdResult;
use thiserror::Error;
use wasm_bindgen::JsValue;

// *************
// *** Error ***
// *************

#[derive(Error, Debug)]
pub enum Error {
    /// The global `window` object is not available.
    #[error("window not found")]
    Window,

    /// A browser API threw.
    #[error("javascript error: {0:?}")]
    Js(JsValue),
}

impl From<JsValue> for Error {
    fn from(err: JsValue) -> Self {
        Error::Js(err)
    }
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;

#[cfg(test)]
#[path = "./result_test.rs"]
mod result_test;
