//! VGER CLI - Verifies delivered archives against the SHA-512 digests listed
//! in their production letters.

mod cli;
mod commands;
mod error;
mod output;
mod progress;
mod prompt;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("VGER_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);
    let show_progress = !cli.quiet && !cli.json;

    let result = match &cli.command {
        cli::Commands::Verify(args) => commands::verify::execute(args, &*formatter, show_progress),
        cli::Commands::Digest(args) => {
            commands::digest::execute(args, &*formatter, show_progress).map(|()| ExitCode::SUCCESS)
        }
        cli::Commands::Normalize(args) => {
            commands::normalize::execute(args, &*formatter).map(|()| ExitCode::SUCCESS)
        }
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(ExitCode::SUCCESS)
        }
    };

    result.unwrap_or_else(|e| {
        formatter.format_error(&e);
        ExitCode::FAILURE
    })
}
