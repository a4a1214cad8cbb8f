//! Command execution context

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::Cli;
use crate::model::{Config, LocaleId};
use crate::service::TranslationService;

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub service: TranslationService,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = crate::config::load_config(cli.config.as_deref())?;
        if let Some(dir) = &cli.dir {
            config.locale.dir = Some(dir.clone());
        }
        let service = crate::config::build_service(&config, cli.locale.as_deref())?;
        Ok(Self { config, service })
    }

    pub fn active_locale(&self) -> LocaleId {
        self.service.locale()
    }

    pub fn fallback_locale(&self) -> Option<LocaleId> {
        self.service.registry().fallback()
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
