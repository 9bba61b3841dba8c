//! Error type shared by the browser glue.
//!
//! Nothing here is surfaced to the visitor. Component boundaries log the error
//! and fall back to defaults so the page stays interactive.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum FxError {
    /// No `window` object (non-browser host or detached worker).
    #[error("browser window is unavailable")]
    MissingWindow,
    /// A required element was not found in the document.
    #[error("element not found: {0}")]
    MissingElement(String),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// A stored theme value that is neither `light` nor `dark`.
    #[error("invalid theme preference: {0:?}")]
    InvalidPreference(String),
    /// A counter target attribute that does not parse as a finite number.
    #[error("invalid counter target: {0:?}")]
    InvalidCount(String),
    /// The inline configuration document could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
