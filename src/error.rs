//! Error Types

use thiserror::Error;

/// Rejected form input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

/// Failure posting a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no browser window available")]
    NoWindow,
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unreadable response body: {0}")]
    Body(String),
}

impl From<wasm_bindgen::JsValue> for SubmitError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        SubmitError::Request(format!("{:?}", err))
    }
}
