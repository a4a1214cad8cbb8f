//! lexicon - UI translation resolver

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lexicon::cli::{commands, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the configured level
    let level = lexicon::config::load_config(cli.config.as_deref())
        .map(|config| config.log.level)
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting lexicon v{}", env!("CARGO_PKG_VERSION"));

    commands::run(&cli)
}
