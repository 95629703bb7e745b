//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use revisor_core::config::ReviewConfig;
use revisor_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Load `--config`, or `revisor.toml` under the root, or defaults
    pub fn load_config(&self) -> Result<ReviewConfig> {
        let explicit = self
            .cli
            .config
            .as_ref()
            .map(|path| resolve_against(self.root, path));
        ReviewConfig::resolve(explicit.as_deref(), self.root)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("revisor {}", env!("CARGO_PKG_VERSION"));
        println!("Run `revisor --help` for usage information.");
        Ok(())
    }
}
