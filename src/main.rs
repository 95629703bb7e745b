//! Revisor - deterministic rubric-based review scoring CLI
//!
//! Scores a batch of documents against a fixed rubric using a generator
//! seeded from each file name, then shows a results dashboard and exports
//! a review report.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use revisor_core::error::{ExitCode as RevisorExitCode, RevisorError};
use revisor_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_format() == Some(OutputFormat::Json);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `Cli.format` exists; honour a JSON request
            // seen in argv with a structured error envelope.
            if argv_format_json {
                let revisor_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        RevisorError::UsageError(err.to_string())
                    }
                    _ => RevisorError::Other(err.to_string()),
                };

                eprintln!("{}", revisor_error.to_json());
                return ExitCode::from(revisor_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(RevisorExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// `--format` value as written in argv, read before clap has parsed anything
fn argv_format() -> Option<OutputFormat> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let value = if arg == "--format" {
            args.next()
        } else {
            arg.strip_prefix("--format=").map(str::to_string)
        };
        if let Some(value) = value {
            return value.parse().ok();
        }
    }
    None
}
