//! Command dispatch logic for revisor

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use revisor_core::error::Result;
use tracing::debug;

mod command;
mod handlers;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), format = %cli.format, "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
