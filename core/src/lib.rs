//! Request/response preview core for the HTTP demo panel.
//!
//! # Overview
//! Turns the demo form (method, URL, header JSON, body) into a validated
//! `HttpRequest`, renders it as an HTTP/1.1-style preview, hands it to a
//! `Transport`, and renders whatever comes back. The core never touches the
//! network itself (host-does-IO pattern), so every rendering rule is
//! testable without a server.
//!
//! # Design
//! - `format` holds the pure functions: `build_request`, `format_request`,
//!   `format_response`.
//! - `panel::DemoPanel` owns the form fields, the two panes, the progress
//!   value, and the request counter.
//! - `Transport` and `ProgressSink` are the two traits a host implements.
//! - All errors are `DemoError`; `DemoError::pane_text` is what the user sees.

pub mod error;
pub mod format;
pub mod http;
pub mod panel;
pub mod progress;
pub mod transport;
pub mod types;

pub use error::{DemoError, ValidationError};
pub use format::{build_request, format_request, format_response, parse_headers};
pub use http::{HttpMethod, HttpRequest, ResponsePreview};
pub use panel::{DemoPanel, Outcome, PanelState};
pub use progress::{NoProgress, ProgressSink};
pub use transport::Transport;
pub use types::{RequestSpec, DEFAULT_URL};
