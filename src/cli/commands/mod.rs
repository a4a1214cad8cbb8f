//! CLI command implementations

pub mod check;
pub mod keys;
pub mod locales;
pub mod translate;

use anyhow::Result;

use crate::cli::args::{Cli, Commands};
use crate::cli::context::Context;

/// Dispatch a parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let ctx = Context::from_cli(cli)?;
    execute(&ctx, &cli.command)
}

/// Execute one command against a prepared context
pub fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Translate {
            key,
            params,
            explain,
        } => translate::execute(ctx, key, params, *explain),
        Commands::Keys { namespace } => keys::execute(ctx, namespace.as_deref()),
        Commands::Locales => locales::execute(ctx),
        Commands::Check => check::execute(ctx),
    }
}
