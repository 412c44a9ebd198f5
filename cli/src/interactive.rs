//! Line-driven version of the demo panel.
//!
//! Each input line is one command. Field commands edit the form; `send`
//! runs the request and prints both panes.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};
use reqview_core::{DemoPanel, HttpMethod, ProgressSink, Transport};
use rustyline::{error::ReadlineError, DefaultEditor};

pub const PROMPT: &str = "reqview> ";

pub const HELP: &str = "\
commands:
  method <GET|POST|PUT|PATCH|DELETE|HEAD|OPTIONS>
  url <URL>
  headers <JSON object>      (no argument clears)
  body <TEXT>                (no argument clears)
  send                       send the request and show both panes
  show                       show the form and request count
  reset                      restore the default form and clear the panes
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    Method(HttpMethod),
    Url(String),
    Headers(String),
    Body(String),
    Send,
    Show,
    Reset,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<PanelCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let cmd = match word.to_ascii_lowercase().as_str() {
        "method" => PanelCommand::Method(rest.parse().map_err(|e| format!("{e}"))?),
        "url" => PanelCommand::Url(rest.to_string()),
        "headers" => PanelCommand::Headers(rest.to_string()),
        "body" => PanelCommand::Body(rest.to_string()),
        "send" => PanelCommand::Send,
        "show" => PanelCommand::Show,
        "reset" => PanelCommand::Reset,
        "help" | "?" => PanelCommand::Help,
        "quit" | "exit" => PanelCommand::Quit,
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };
    Ok(Some(cmd))
}

/// Print both panes the way `send` shows them.
pub fn write_panes<W: Write>(out: &mut W, panel: &DemoPanel) -> std::io::Result<()> {
    writeln!(out, "--- request ---")?;
    writeln!(out, "{}", panel.request_pane().trim_end_matches('\n'))?;
    writeln!(out, "--- response ---")?;
    writeln!(out, "{}", panel.response_pane())?;
    writeln!(out, "requests sent: {}", panel.request_count())
}

fn write_form<W: Write>(out: &mut W, panel: &DemoPanel) -> std::io::Result<()> {
    let spec = panel.spec();
    writeln!(out, "method:  {}", spec.method)?;
    writeln!(out, "url:     {}", spec.url)?;
    writeln!(out, "headers: {}", spec.headers)?;
    if panel.body_visible() {
        writeln!(out, "body:    {}", spec.body)?;
    }
    writeln!(out, "requests sent: {}", panel.request_count())
}

/// Whether the session keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse and apply one input line to `panel`.
pub fn handle_line<W, T, P>(line: &str, out: &mut W, panel: &mut DemoPanel, transport: &T, sink: &mut P) -> Result<Flow>
where
    W: Write,
    T: Transport + ?Sized,
    P: ProgressSink + ?Sized,
{
    let cmd = match parse_command(line) {
        Ok(Some(cmd)) => cmd,
        Ok(None) => return Ok(Flow::Continue),
        Err(msg) => {
            writeln!(out, "{msg}")?;
            return Ok(Flow::Continue);
        }
    };

    match cmd {
        PanelCommand::Method(method) => {
            panel.set_method(method);
            if !panel.body_visible() && !panel.spec().body.is_empty() {
                writeln!(out, "(body is not sent with {method})")?;
            }
        }
        PanelCommand::Url(url) => panel.set_url(&url),
        PanelCommand::Headers(headers) => panel.set_headers(&headers),
        PanelCommand::Body(body) => {
            panel.set_body(&body);
            if !panel.body_visible() {
                writeln!(out, "(body is not sent with {})", panel.spec().method)?;
            }
        }
        PanelCommand::Send => {
            // The error text is already in the response pane.
            let _ = panel.send(transport, sink);
            write_panes(out, panel)?;
        }
        PanelCommand::Show => write_form(out, panel)?,
        PanelCommand::Reset => {
            panel.reset();
            writeln!(out, "panel reset")?;
        }
        PanelCommand::Help => writeln!(out, "{HELP}")?,
        PanelCommand::Quit => return Ok(Flow::Quit),
    }
    out.flush()?;
    Ok(Flow::Continue)
}

/// Run commands from `input` until `quit` or end of input. Used for piped
/// stdin and scripted sessions.
pub fn run<R, W, T, P>(input: R, out: &mut W, panel: &mut DemoPanel, transport: &T, sink: &mut P) -> Result<()>
where
    R: BufRead,
    W: Write,
    T: Transport + ?Sized,
    P: ProgressSink + ?Sized,
{
    for line in input.lines() {
        if handle_line(&line?, out, panel, transport, sink)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Ctrl+C and Ctrl+D end the session; any other editor error is fatal.
pub fn readline_flow(err: ReadlineError) -> Result<Flow> {
    match err {
        ReadlineError::Interrupted | ReadlineError::Eof => Ok(Flow::Quit),
        other => Err(anyhow!("failed to read input: {other}")),
    }
}

/// Run commands from a terminal with line editing and history.
pub fn run_terminal<W, T, P>(out: &mut W, panel: &mut DemoPanel, transport: &T, sink: &mut P) -> Result<()>
where
    W: Write,
    T: Transport + ?Sized,
    P: ProgressSink + ?Sized,
{
    let mut editor = DefaultEditor::new().context("failed to create line editor")?;
    loop {
        let flow = match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                handle_line(&line, out, panel, transport, sink)?
            }
            Err(err) => readline_flow(err)?,
        };
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}
