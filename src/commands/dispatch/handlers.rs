//! Command handlers

use tracing::debug;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{evaluate, rubric, seed};
use revisor_core::error::Result;
use revisor_core::trace_time;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Evaluate(args) => {
                let config = ctx.load_config()?;
                debug!(elapsed = ?ctx.start.elapsed(), "load_config");
                let result = evaluate::execute(ctx.cli, ctx.root, &config, args);
                trace_time!(ctx.start, "evaluate");
                result
            }
            Commands::Rubric(args) => {
                let config = ctx.load_config()?;
                rubric::execute(ctx.cli, ctx.root, &config, args)
            }
            Commands::Seed(args) => seed::execute(ctx.cli, &args.identifiers),
        }
    }
}
