#![forbid(unsafe_code)]

//! Errors from DOM helpers.

/// Errors from DOM operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// A DOM call threw; carries the exception message.
    Js(String),
}

impl core::fmt::Display for DomError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global window available"),
            Self::NoDocument => write!(f, "window has no document"),
            Self::Js(msg) => write!(f, "DOM exception: {msg}"),
        }
    }
}

impl std::error::Error for DomError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        let msg = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
        };
        Self::Js(msg)
    }
}
