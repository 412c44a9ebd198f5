//! Command-line front end for the HTTP demo panel.
//!
//! # Overview
//! `reqview send` runs one request and prints both panes; `reqview panel`
//! reads panel commands from stdin. Requests go out through
//! `UreqTransport`; the panes and all formatting come from `reqview-core`.

pub mod interactive;
pub mod progress;
pub mod transport;

use std::io::Write;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use reqview_core::{DemoError, DemoPanel, HttpMethod, ProgressSink, RequestSpec, Transport};
use tracing_subscriber::EnvFilter;

pub use progress::TerminalProgress;
pub use transport::UreqTransport;

#[derive(Debug, Parser)]
#[command(name = "reqview", version, about = "Preview, send, and inspect HTTP requests")]
pub struct Cli {
    /// Give up on a request after this many seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Log request details and progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send one request and print the request and response panes
    Send(SendArgs),
    /// Interactive panel: edit the form and send from stdin commands
    Panel,
}

#[derive(Debug, Clone, Args)]
pub struct SendArgs {
    /// Request method
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: HttpMethod,

    /// Request headers as a JSON object, e.g. '{"Accept":"application/json"}'
    #[arg(short = 'H', long, default_value = "")]
    pub headers: String,

    /// Request body; only sent with POST, PUT and PATCH
    #[arg(short = 'd', long, default_value = "")]
    pub body: String,

    /// Target URL
    #[arg(env = "REQVIEW_URL")]
    pub url: Option<String>,
}

impl SendArgs {
    pub fn to_spec(&self) -> RequestSpec {
        RequestSpec::new(self.method, self.url.as_deref().unwrap_or_default())
            .with_headers(&self.headers)
            .with_body(&self.body)
    }
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Install the global tracing subscriber on stderr.
///
/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}

/// One-shot send: prints the request pane, a blank line, then the response
/// pane. Returns the demo outcome so the caller can pick an exit status.
pub fn send_once<W, T, P>(
    args: &SendArgs,
    out: &mut W,
    transport: &T,
    sink: &mut P,
) -> Result<Result<(), DemoError>>
where
    W: Write,
    T: Transport + ?Sized,
    P: ProgressSink + ?Sized,
{
    let mut panel = DemoPanel::with_spec(args.to_spec());
    let outcome = panel.send(transport, sink).map(|_| ());

    if !panel.request_pane().is_empty() {
        writeln!(out, "{}", panel.request_pane().trim_end_matches('\n'))?;
        writeln!(out)?;
    }
    writeln!(out, "{}", panel.response_pane())?;
    out.flush()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use reqview_core::{HttpRequest, NoProgress, ResponsePreview, ValidationError};

    use super::*;

    fn created(req: &HttpRequest) -> Result<ResponsePreview, DemoError> {
        Ok(ResponsePreview {
            status: 201,
            status_text: "Created".to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: req.body.clone().unwrap_or_default(),
        })
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("reqview").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn send_args_parse_into_a_spec() {
        let cli = parse(&["send", "-X", "patch", "-H", r#"{"X-Test":"1"}"#, "-d", "x=1", "https://example.com/a"]);
        let Command::Send(args) = cli.command else {
            panic!("expected send");
        };
        let spec = args.to_spec();
        assert_eq!(spec.method, HttpMethod::Patch);
        assert_eq!(spec.url, "https://example.com/a");
        assert_eq!(spec.headers, r#"{"X-Test":"1"}"#);
        assert_eq!(spec.body, "x=1");
    }

    #[test]
    fn unknown_method_is_a_usage_error() {
        let result = Cli::try_parse_from(["reqview", "send", "-X", "BREW", "https://example.com/"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["panel", "--timeout-secs", "5", "-v"]);
        assert!(matches!(cli.command, Command::Panel));
        assert_eq!(cli.timeout(), Some(Duration::from_secs(5)));
        assert!(cli.verbose);
    }

    #[test]
    fn send_once_prints_request_then_response() {
        let cli = parse(&["send", "-X", "POST", "-d", "{}", "https://example.com/posts"]);
        let Command::Send(args) = cli.command else {
            panic!("expected send");
        };
        let mut out = Vec::new();
        let outcome = send_once(&args, &mut out, &created, &mut NoProgress).unwrap();

        assert!(outcome.is_ok());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "POST /posts HTTP/1.1\nHost: example.com\nContent-Length: 2\n\n{}\n\nHTTP/1.1 201 Created\ncontent-type: application/json\n\n{}\n"
        );
    }

    #[test]
    fn send_once_without_url_prints_prompt_only() {
        let args = SendArgs {
            method: HttpMethod::Get,
            headers: String::new(),
            body: String::new(),
            url: None,
        };
        let mut out = Vec::new();
        let outcome = send_once(&args, &mut out, &created, &mut NoProgress).unwrap();

        assert_eq!(outcome, Err(DemoError::Validation(ValidationError::MissingUrl)));
        assert_eq!(String::from_utf8(out).unwrap(), "Please enter a URL\n");
    }
}
