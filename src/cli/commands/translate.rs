//! Translate command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::interpolate::{interpolate, Params};
use crate::service::Source;

/// Execute the translate command
pub fn execute(ctx: &Context, key: &str, params: &[(String, String)], explain: bool) -> Result<()> {
    let params: Params = params.iter().map(|(n, v)| (n.as_str(), v.as_str())).collect();
    let resolution = ctx.service.resolve(key);

    println!("{}", interpolate(&resolution.template, &params));

    if explain {
        let source = match &resolution.source {
            Source::Active(locale) => format!("from {}", locale),
            Source::Fallback(locale) => format!("from fallback {}", locale),
            Source::RawKey => "no translation, showing key".to_string(),
        };
        eprintln!("{} {}", "→".cyan(), source.dimmed());
    }

    Ok(())
}
