//! The I/O seam between the core and whatever executes HTTP calls.

use crate::error::DemoError;
use crate::http::{HttpRequest, ResponsePreview};

/// Executes one HTTP call to completion.
///
/// Implementations must return any HTTP status, including 4xx/5xx, as a
/// `ResponsePreview`. Only failures that leave no response to show
/// (connect errors, IO errors, bodies that are not text) are `Err`, and
/// those should be `DemoError::Transport`.
pub trait Transport {
    fn execute(&self, req: &HttpRequest) -> Result<ResponsePreview, DemoError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<ResponsePreview, DemoError>,
{
    fn execute(&self, req: &HttpRequest) -> Result<ResponsePreview, DemoError> {
        self(req)
    }
}
