//! Error types for the request demo.
//!
//! # Design
//! Every failure is caught where the user action happens and rendered into
//! the response pane; `pane_text` is that rendering. Callers still receive
//! the typed error so a front end can pick an exit status or log level.

use thiserror::Error;

/// Problems with the user's input that stop a send before formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter a URL")]
    MissingUrl,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("unknown HTTP method: {0}")]
    UnknownMethod(String),
}

/// Errors produced while building, sending, or reading a demo request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The header text was not a JSON object. No request was sent.
    #[error("invalid headers JSON: {0}")]
    Parse(String),

    /// The call itself failed: connect, IO, or an unreadable body.
    #[error("{0}")]
    Transport(String),
}

impl DemoError {
    /// Text shown in the response pane for this error.
    pub fn pane_text(&self) -> String {
        match self {
            DemoError::Validation(ValidationError::MissingUrl) => "Please enter a URL".to_string(),
            DemoError::Parse(_) => "Error: Invalid headers JSON".to_string(),
            other => format!("Error: {other}"),
        }
    }
}
