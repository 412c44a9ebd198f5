//! Request validation and the two preview renderings.
//!
//! # Design
//! `build_request` turns the raw form fields into a validated `HttpRequest`
//! and is the only place input can fail. `format_request` and
//! `format_response` are infallible renderers, so once a request is built
//! the request pane can always be written.

use serde_json::Value;
use url::Url;

use crate::error::{DemoError, ValidationError};
use crate::http::{HttpRequest, ResponsePreview};
use crate::types::RequestSpec;

/// Validate `spec` and produce the request the transport will send.
///
/// Checks run in order: URL present, URL parses, header text parses. The
/// body is dropped for methods that do not carry one.
pub fn build_request(spec: &RequestSpec) -> Result<HttpRequest, DemoError> {
    let raw_url = spec.url.trim();
    if raw_url.is_empty() {
        return Err(ValidationError::MissingUrl.into());
    }
    let url = Url::parse(raw_url).map_err(|e| ValidationError::InvalidUrl(e.to_string()))?;
    if url.host_str().is_none() {
        return Err(ValidationError::InvalidUrl(format!("{raw_url} has no host")).into());
    }

    let headers = parse_headers(&spec.headers)?;
    let body = (spec.method.allows_body() && !spec.body.is_empty()).then(|| spec.body.clone());

    Ok(HttpRequest {
        method: spec.method,
        url,
        headers,
        body,
    })
}

/// Parse header text as a JSON object, keeping key order.
///
/// Empty text means no headers. String values are taken as-is; any other
/// JSON value is rendered as its JSON text.
pub fn parse_headers(text: &str) -> Result<Vec<(String, String)>, DemoError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let value: Value = serde_json::from_str(text).map_err(|e| DemoError::Parse(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(DemoError::Parse("expected a JSON object".to_string()));
    };
    Ok(map
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (name, value)
        })
        .collect())
}

/// `Host` header value: the host, plus the port when it is not the default.
pub fn host_header(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Render the request pane.
pub fn format_request(req: &HttpRequest) -> String {
    // Non-special schemes can parse with an empty path.
    let path = match req.url.path() {
        "" => "/",
        path => path,
    };
    let mut out = format!("{} {} HTTP/1.1\nHost: {}\n", req.method, path, host_header(&req.url));
    for (name, value) in &req.headers {
        out.push_str(&format!("{name}: {value}\n"));
    }
    if let Some(body) = &req.body {
        out.push_str(&format!("Content-Length: {}\n", body.len()));
        out.push('\n');
        out.push_str(body);
    }
    out
}

/// Render the response pane.
pub fn format_response(resp: &ResponsePreview) -> String {
    let mut out = format!("HTTP/1.1 {} {}\n", resp.status, resp.status_text);
    for (name, value) in &resp.headers {
        out.push_str(&format!("{name}: {value}\n"));
    }
    out.push('\n');
    out.push_str(&resp.body);
    out
}
