//! Check command implementation

use anyhow::{bail, Result};
use colored::Colorize;

use crate::checker::{check_all, Coverage, Severity};
use crate::cli::context::Context;

/// Execute the check command
pub fn execute(ctx: &Context) -> Result<()> {
    let registry = ctx.service.registry();
    let active = ctx.active_locale();
    let Some(fallback) = ctx.fallback_locale() else {
        bail!("No fallback locale configured");
    };

    let (Some(target), Some(reference)) = (registry.get(&active), registry.get(&fallback)) else {
        bail!("Locale '{}' or '{}' is not registered", active, fallback);
    };

    let coverage = Coverage::of(&target, &reference);
    println!(
        "{} {} covers {}/{} keys of {} ({:.1}%)",
        "→".cyan(),
        active.to_string().bold(),
        coverage.present,
        coverage.total,
        fallback,
        coverage.percent()
    );

    let result = check_all(&target, &reference);
    if result.is_ok() {
        ctx.print_success("No issues found!");
        return Ok(());
    }

    for issue in &result.issues {
        match issue.severity {
            Severity::Warning => ctx.print_warning(&issue.message),
            Severity::Error => ctx.print_error(&issue.message),
        }
    }

    let errors = result.count(Severity::Error);
    let warnings = result.count(Severity::Warning);
    println!();
    if result.has_errors() {
        bail!("Found {} errors, {} warnings", errors, warnings);
    }
    println!("Found {} warnings", warnings);
    Ok(())
}
