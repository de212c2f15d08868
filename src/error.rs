/// Error types for browser API calls made from Rust

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtensionError {
    #[error("Browser API call failed: {0}")]
    Bridge(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl ExtensionError {
    /// Wrap a rejected promise value from one of the JS bridges
    pub fn bridge(context: &str, value: JsValue) -> Self {
        let detail = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ExtensionError::Bridge(format!("{}: {}", context, detail))
    }
}

impl From<serde_wasm_bindgen::Error> for ExtensionError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ExtensionError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExtensionError>;
