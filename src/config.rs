//! Client Configuration
//!
//! Where records are posted and which CSRF token to send, read from the
//! host page's `<meta>` tags.

/// Meta tag carrying the server's CSRF token
pub const CSRF_META: &str = "csrf-token";
/// Meta tag overriding the POST endpoint
pub const ENDPOINT_META: &str = "records-endpoint";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// POST target. Empty means the current document URL.
    pub endpoint: String,
    pub csrf_token: Option<String>,
}

impl ClientConfig {
    /// Build from the page's meta tags, falling back to defaults when absent
    pub fn from_document() -> Self {
        Self::from_meta(meta_content)
    }

    fn from_meta(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            endpoint: lookup(ENDPOINT_META).unwrap_or_default(),
            csrf_token: lookup(CSRF_META).filter(|token| !token.is_empty()),
        }
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
}
