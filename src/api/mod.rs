//! Server API
//!
//! The seam between the record form and the HTTP transport.

mod records;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SubmitError;
use crate::models::SubmissionPayload;

pub use records::FetchSubmitter;

/// Sends a new record to the server and returns whatever it answered
#[async_trait(?Send)]
pub trait RecordSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<Value, SubmitError>;
}

/// Turn a response body into the opaque value handed to the form's caller.
///
/// JSON content types are parsed; anything else is passed on as a string.
/// An empty body (e.g. 204 No Content) decodes to `null`.
pub fn decode_response(content_type: Option<&str>, body: String) -> Result<Value, SubmitError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    let is_json = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("json"))
        .unwrap_or(false);
    if !is_json {
        return Ok(Value::String(body));
    }
    serde_json::from_str(&body).map_err(|e| SubmitError::Body(e.to_string()))
}
