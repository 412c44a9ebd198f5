//! The demo panel: form fields, the two output panes, and the send action.
//!
//! # Design
//! `send` borrows the panel mutably for the whole round-trip, so a second
//! send cannot start while one is in flight. Every outcome, good or bad,
//! ends up as text in the response pane; the typed result is returned as
//! well so the caller can decide how loudly to report it.

use tracing::{debug, info, warn};

use crate::error::DemoError;
use crate::format::{build_request, format_request, format_response};
use crate::http::{HttpMethod, ResponsePreview};
use crate::progress::{self, ProgressSink};
use crate::transport::Transport;
use crate::types::RequestSpec;

/// Where the panel is in a send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    InFlight,
}

/// How the most recent send ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct DemoPanel {
    spec: RequestSpec,
    request_pane: String,
    response_pane: String,
    progress: u8,
    request_count: u64,
    state: PanelState,
    last_outcome: Option<Outcome>,
}

impl Default for DemoPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoPanel {
    pub fn new() -> Self {
        Self::with_spec(RequestSpec::default())
    }

    pub fn with_spec(spec: RequestSpec) -> Self {
        Self {
            spec,
            request_pane: String::new(),
            response_pane: String::new(),
            progress: 0,
            request_count: 0,
            state: PanelState::Idle,
            last_outcome: None,
        }
    }

    pub fn spec(&self) -> &RequestSpec {
        &self.spec
    }

    pub fn set_method(&mut self, method: HttpMethod) {
        self.spec.method = method;
    }

    pub fn set_url(&mut self, url: &str) {
        self.spec.url = url.to_string();
    }

    pub fn set_headers(&mut self, headers: &str) {
        self.spec.headers = headers.to_string();
    }

    pub fn set_body(&mut self, body: &str) {
        self.spec.body = body.to_string();
    }

    /// Whether the body field applies to the selected method.
    pub fn body_visible(&self) -> bool {
        self.spec.method.allows_body()
    }

    pub fn request_pane(&self) -> &str {
        &self.request_pane
    }

    pub fn response_pane(&self) -> &str {
        &self.response_pane
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Successful sends since the panel was created. `reset` keeps it.
    pub fn request_count(&self) -> u64 {
        self.request_count
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Build, preview, send, and render one request.
    ///
    /// Validation and header errors stop before the transport is called and
    /// leave the request pane untouched.
    pub fn send<T, P>(&mut self, transport: &T, sink: &mut P) -> Result<ResponsePreview, DemoError>
    where
        T: Transport + ?Sized,
        P: ProgressSink + ?Sized,
    {
        self.state = PanelState::InFlight;
        let result = self.round_trip(transport, sink);
        self.state = PanelState::Idle;

        match &result {
            Ok(resp) => {
                self.last_outcome = Some(Outcome::Succeeded);
                self.request_count += 1;
                info!(
                    method = %self.spec.method,
                    url = %self.spec.url,
                    status = resp.status,
                    count = self.request_count,
                    "request completed"
                );
            }
            Err(err) => {
                self.last_outcome = Some(Outcome::Failed);
                self.response_pane = err.pane_text();
                if self.progress != 0 {
                    self.set_progress(sink, 0);
                }
                warn!(method = %self.spec.method, url = %self.spec.url, error = %err, "request failed");
            }
        }
        result
    }

    fn round_trip<T, P>(&mut self, transport: &T, sink: &mut P) -> Result<ResponsePreview, DemoError>
    where
        T: Transport + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let req = build_request(&self.spec)?;
        self.request_pane = format_request(&req);
        debug!(preview = %self.request_pane, "request formatted");
        self.set_progress(sink, progress::FORMATTED);

        self.set_progress(sink, progress::SENDING);
        let resp = transport.execute(&req)?;
        self.set_progress(sink, progress::RECEIVED);

        self.response_pane = format_response(&resp);
        self.set_progress(sink, progress::DONE);
        sink.reset_after(progress::RESET_DELAY);
        self.progress = 0;
        Ok(resp)
    }

    /// Restore the form and panes to their initial state.
    pub fn reset(&mut self) {
        self.spec = RequestSpec::default();
        self.request_pane.clear();
        self.response_pane.clear();
        self.progress = 0;
        self.state = PanelState::Idle;
        self.last_outcome = None;
    }

    fn set_progress<P: ProgressSink + ?Sized>(&mut self, sink: &mut P, percent: u8) {
        debug!(percent, "progress");
        self.progress = percent;
        sink.set(percent);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use super::*;
    use crate::error::ValidationError;
    use crate::http::HttpRequest;
    use crate::progress::NoProgress;
    use crate::types::DEFAULT_URL;

    #[derive(Default)]
    struct Recorder {
        values: Vec<u8>,
        reset_delay: Option<Duration>,
    }

    impl ProgressSink for Recorder {
        fn set(&mut self, percent: u8) {
            self.values.push(percent);
        }

        fn reset_after(&mut self, delay: Duration) {
            self.reset_delay = Some(delay);
            self.set(0);
        }
    }

    fn ok_response(req: &HttpRequest) -> Result<ResponsePreview, DemoError> {
        Ok(ResponsePreview {
            status: 200,
            status_text: "OK".to_string(),
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: format!("{} {}", req.method, req.url.path()),
        })
    }

    fn refused(_: &HttpRequest) -> Result<ResponsePreview, DemoError> {
        Err(DemoError::Transport("connection refused".to_string()))
    }

    #[test]
    fn successful_send_fills_both_panes() {
        let mut panel = DemoPanel::with_spec(RequestSpec::new(HttpMethod::Get, "https://example.com/posts/1"));
        let resp = panel.send(&ok_response, &mut NoProgress).unwrap();

        assert_eq!(resp.status, 200);
        assert_eq!(panel.request_pane(), "GET /posts/1 HTTP/1.1\nHost: example.com\n");
        assert_eq!(panel.response_pane(), "HTTP/1.1 200 OK\ncontent-type: text/plain\n\nGET /posts/1");
        assert_eq!(panel.request_count(), 1);
        assert_eq!(panel.state(), PanelState::Idle);
        assert_eq!(panel.last_outcome(), Some(Outcome::Succeeded));
    }

    #[test]
    fn progress_steps_then_resets_after_delay() {
        let mut panel = DemoPanel::new();
        let mut rec = Recorder::default();
        panel.send(&ok_response, &mut rec).unwrap();

        assert_eq!(rec.values, vec![30, 60, 90, 100, 0]);
        assert_eq!(rec.reset_delay, Some(Duration::from_millis(1000)));
        assert_eq!(panel.progress(), 0);
    }

    #[test]
    fn transport_failure_renders_error_and_zeroes_progress() {
        let mut panel = DemoPanel::new();
        let mut rec = Recorder::default();
        let err = panel.send(&refused, &mut rec).unwrap_err();

        assert!(matches!(err, DemoError::Transport(_)));
        assert_eq!(panel.response_pane(), "Error: connection refused");
        assert!(panel.request_pane().starts_with("GET /posts/1 HTTP/1.1\n"));
        assert_eq!(rec.values, vec![30, 60, 0]);
        assert_eq!(panel.request_count(), 0);
        assert_eq!(panel.last_outcome(), Some(Outcome::Failed));
    }

    #[test]
    fn bad_headers_never_reach_the_transport() {
        let calls = Cell::new(0);
        let counting = |req: &HttpRequest| {
            calls.set(calls.get() + 1);
            ok_response(req)
        };

        let mut panel = DemoPanel::new();
        panel.set_headers("{invalid json");
        let err = panel.send(&counting, &mut NoProgress).unwrap_err();

        assert!(matches!(err, DemoError::Parse(_)));
        assert_eq!(calls.get(), 0);
        assert_eq!(panel.response_pane(), "Error: Invalid headers JSON");
        assert_eq!(panel.request_pane(), "");
    }

    #[test]
    fn empty_url_is_rejected_before_formatting() {
        let mut panel = DemoPanel::new();
        panel.set_url("");
        let mut rec = Recorder::default();
        let err = panel.send(&ok_response, &mut rec).unwrap_err();

        assert_eq!(err, DemoError::Validation(ValidationError::MissingUrl));
        assert_eq!(panel.response_pane(), "Please enter a URL");
        assert_eq!(panel.request_pane(), "");
        assert!(rec.values.is_empty());
    }

    #[test]
    fn parse_failure_after_a_send_leaves_the_bar_alone() {
        let mut panel = DemoPanel::new();
        panel.send(&ok_response, &mut NoProgress).unwrap();
        panel.set_headers("[1, 2]");
        let mut rec = Recorder::default();
        let err = panel.send(&ok_response, &mut rec).unwrap_err();

        assert!(matches!(err, DemoError::Parse(_)));
        assert!(rec.values.is_empty());
        assert_eq!(panel.progress(), 0);
    }

    #[test]
    fn server_error_status_counts_as_a_response() {
        let server_error = |_: &HttpRequest| -> Result<ResponsePreview, DemoError> {
            Ok(ResponsePreview {
                status: 500,
                status_text: "Internal Server Error".to_string(),
                headers: Vec::new(),
                body: "boom".to_string(),
            })
        };
        let mut panel = DemoPanel::new();
        panel.send(&server_error, &mut NoProgress).unwrap();

        assert_eq!(panel.response_pane(), "HTTP/1.1 500 Internal Server Error\n\nboom");
        assert_eq!(panel.request_count(), 1);
    }

    #[test]
    fn later_send_overwrites_earlier_panes() {
        let mut panel = DemoPanel::new();
        panel.send(&ok_response, &mut NoProgress).unwrap();
        panel.set_method(HttpMethod::Delete);
        panel.send(&ok_response, &mut NoProgress).unwrap();

        assert!(panel.request_pane().starts_with("DELETE /posts/1"));
        assert!(panel.response_pane().ends_with("DELETE /posts/1"));
        assert_eq!(panel.request_count(), 2);
    }

    #[test]
    fn body_visibility_follows_method() {
        let mut panel = DemoPanel::new();
        assert!(!panel.body_visible());
        panel.set_method(HttpMethod::Patch);
        assert!(panel.body_visible());
        panel.set_method(HttpMethod::Delete);
        assert!(!panel.body_visible());
    }

    #[test]
    fn reset_restores_defaults_but_keeps_counter() {
        let mut panel = DemoPanel::new();
        panel.set_method(HttpMethod::Post);
        panel.set_url("https://example.com/posts");
        panel.set_headers(r#"{"X-Test":"1"}"#);
        panel.set_body("hello");
        panel.send(&ok_response, &mut NoProgress).unwrap();

        panel.reset();

        assert_eq!(panel.spec(), &RequestSpec::new(HttpMethod::Get, DEFAULT_URL));
        assert_eq!(panel.request_pane(), "");
        assert_eq!(panel.response_pane(), "");
        assert_eq!(panel.progress(), 0);
        assert_eq!(panel.last_outcome(), None);
        assert_eq!(panel.request_count(), 1);
    }
}
