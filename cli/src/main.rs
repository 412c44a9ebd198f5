use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use reqview::{init_logging, interactive, send_once, Cli, Command, TerminalProgress, UreqTransport};
use reqview_core::DemoPanel;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let transport = UreqTransport::new(cli.timeout());
    let mut progress = TerminalProgress::stderr();
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Command::Send(args) => {
            let mut progress = progress.hold_when_done(false);
            match send_once(args, &mut stdout, &transport, &mut progress)? {
                Ok(()) => Ok(ExitCode::SUCCESS),
                Err(_) => Ok(ExitCode::FAILURE),
            }
        }
        Command::Panel => {
            writeln!(stdout, "{}", interactive::HELP)?;
            stdout.flush()?;
            let mut panel = DemoPanel::new();
            if io::stdin().is_terminal() {
                interactive::run_terminal(&mut stdout, &mut panel, &transport, &mut progress)?;
            } else {
                interactive::run(io::stdin().lock(), &mut stdout, &mut panel, &transport, &mut progress)?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
