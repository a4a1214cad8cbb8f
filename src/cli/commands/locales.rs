//! Locales command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;

/// Execute the locales command
pub fn execute(ctx: &Context) -> Result<()> {
    let registry = ctx.service.registry();
    let active = ctx.active_locale();
    let fallback = ctx.fallback_locale();

    match &ctx.config.locale.dir {
        Some(dir) => println!("{} {}", "Locale files:".dimmed(), dir.display()),
        None => println!("{} {}", "Locale files:".dimmed(), "bundled"),
    }

    for locale in registry.locales() {
        let entries = registry.get(&locale).map_or(0, |tree| tree.len());
        let mut marks = Vec::new();
        if locale == active {
            marks.push("active".green().to_string());
        }
        if fallback.as_ref() == Some(&locale) {
            marks.push("fallback".yellow().to_string());
        }
        println!(
            "{:<10} {:>5} entries  {}",
            locale.to_string().bold(),
            entries,
            marks.join(" ")
        );
    }

    Ok(())
}
