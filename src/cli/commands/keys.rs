//! Keys command implementation - List key paths of the active locale

use anyhow::{bail, Result};
use colored::Colorize;

use crate::cli::context::Context;

/// Execute the keys command
pub fn execute(ctx: &Context, namespace: Option<&str>) -> Result<()> {
    let locale = ctx.active_locale();
    let Some(tree) = ctx.service.registry().get(&locale) else {
        bail!("Locale '{}' is not registered", locale);
    };

    if let Some(ns) = namespace {
        if tree.namespace(ns).is_none() {
            bail!("Namespace '{}' not found in {}", ns, locale);
        }
    }

    let prefix = namespace.map(|ns| format!("{}.", ns));
    let keys: Vec<String> = tree
        .keys()
        .into_iter()
        .filter(|key| prefix.as_deref().map_or(true, |p| key.starts_with(p)))
        .collect();

    if keys.is_empty() {
        println!("No keys found.");
        return Ok(());
    }

    for key in &keys {
        let text = ctx.service.translate(key);
        println!("{:<40} {}", key.cyan(), text.dimmed());
    }
    println!();
    println!("Total: {} keys", keys.len());

    Ok(())
}
