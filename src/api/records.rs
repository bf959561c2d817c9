//! Record Endpoint
//!
//! `window.fetch` transport for creating records.

use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::{decode_response, RecordSubmitter};
use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::models::SubmissionPayload;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";

/// Posts form-encoded records with the browser's fetch API
#[derive(Debug, Clone, Default)]
pub struct FetchSubmitter {
    config: ClientConfig,
}

impl FetchSubmitter {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn headers(&self) -> Result<Headers, SubmitError> {
        let headers = Headers::new()?;
        headers.set("Content-Type", FORM_CONTENT_TYPE)?;
        headers.set("Accept", ACCEPT)?;
        headers.set("X-Requested-With", "XMLHttpRequest")?;
        if let Some(token) = &self.config.csrf_token {
            headers.set("X-CSRF-Token", token)?;
        }
        Ok(headers)
    }
}

#[async_trait(?Send)]
impl RecordSubmitter for FetchSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<Value, SubmitError> {
        let window = web_sys::window().ok_or(SubmitError::NoWindow)?;

        let init = RequestInit::new();
        init.set_method("POST");
        let headers = self.headers()?;
        init.set_headers(&headers);
        init.set_body(&payload.to_form_urlencoded().into());

        let request = Request::new_with_str_and_init(&self.config.endpoint, &init)?;
        log::debug!("[API] POST {:?}", request.url());

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;
        if !response.ok() {
            return Err(SubmitError::Status(response.status()));
        }

        let content_type = response.headers().get("content-type")?;
        let body = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .ok_or_else(|| SubmitError::Body("response text was not a string".to_string()))?;
        decode_response(content_type.as_deref(), body)
    }
}
