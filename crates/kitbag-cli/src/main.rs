//! Kitbag CLI - substitution key generation and source-tree archiving.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match init_tracing(cli.verbose).and_then(|()| run(&cli, &*formatter)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            formatter.format_error(cli.command.name(), &e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli, formatter: &dyn output::OutputFormatter) -> Result<()> {
    let result = match &cli.command {
        cli::Commands::Keygen(args) => commands::keygen::execute(args, formatter),
        cli::Commands::Archive(args) => commands::archive::execute(args, formatter),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    };

    if cli.pause {
        // The prompt follows failures too; the error is reported after it.
        wait_for_enter()?;
    }

    result
}

/// Logs go to stderr; `RUST_LOG` overrides the flag-derived level.
fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn wait_for_enter() -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "<Press Enter to Exit>")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
