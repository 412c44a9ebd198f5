//! User-facing input for a single demo send.

use serde::{Deserialize, Serialize};

use crate::http::HttpMethod;

/// URL the panel starts with and returns to on reset.
pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// The raw fields of the demo form, exactly as typed.
///
/// `headers` is JSON object text and `body` is sent verbatim. Neither is
/// validated until the request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: String,
    #[serde(default)]
    pub headers: String,
    #[serde(default)]
    pub body: String,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: String::new(),
            body: String::new(),
        }
    }

    pub fn with_headers(mut self, headers: &str) -> Self {
        self.headers = headers.to_string();
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }
}

impl Default for RequestSpec {
    fn default() -> Self {
        Self::new(HttpMethod::Get, DEFAULT_URL)
    }
}
