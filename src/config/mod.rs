//! Configuration management module
//!
//! Turns a [`Config`] into a ready [`TranslationService`]: picks a provider,
//! registers its locales, designates the fallback and activates the
//! configured locale.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::model::{Config, LocaleId};
use crate::provider::{self, DirProvider, EmbeddedProvider, LocaleProvider};
use crate::registry::LocaleRegistry;
use crate::service::TranslationService;

/// Load the config at `path`, or the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.map_or_else(Config::config_path, Path::to_path_buf);
    Config::load_from(&path).with_context(|| format!("Failed to load config {}", path.display()))
}

/// The provider a config asks for
pub fn provider_for(config: &Config) -> Box<dyn LocaleProvider> {
    match &config.locale.dir {
        Some(dir) => Box::new(DirProvider::new(dir)),
        None => Box::new(EmbeddedProvider),
    }
}

/// Build a translation service from config.
///
/// `requested` overrides `locale.active`; either is negotiated against the
/// registered locales (`zh` picks `zh-TW`).
pub fn build_service(config: &Config, requested: Option<&str>) -> Result<TranslationService> {
    let registry = Arc::new(LocaleRegistry::new());
    let provider = provider_for(config);
    provider::load_all(&registry, provider.as_ref()).context("Failed to load locales")?;

    let fallback = LocaleId::parse(&config.locale.fallback)?;
    let service = TranslationService::init(Arc::clone(&registry), &fallback)
        .with_context(|| format!("Fallback locale '{}' is not available", fallback))?;

    let wanted = LocaleId::parse(requested.unwrap_or(&config.locale.active))?;
    let active = registry
        .negotiate(&wanted)
        .with_context(|| format!("Locale '{}' is not available", wanted))?;
    service.set_locale(&active)?;

    tracing::debug!(active = %active, fallback = %fallback, "translation service ready");
    Ok(service)
}
