//! Locale tables bundled into the binary

use super::LocaleProvider;
use crate::error::LoadError;
use crate::model::{LocaleId, ResourceTree};

/// Embedded English table (fallback)
const EMBEDDED_EN_US: &str = include_str!("../../assets/locales/en-US.toml");
/// Embedded Traditional Chinese table
const EMBEDDED_ZH_TW: &str = include_str!("../../assets/locales/zh-TW.toml");

const EMBEDDED: &[(&str, &str)] = &[("en-US", EMBEDDED_EN_US), ("zh-TW", EMBEDDED_ZH_TW)];

/// Serves the locale tables compiled into the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedProvider;

impl EmbeddedProvider {
    /// Tag of the bundled fallback locale
    pub const FALLBACK: &'static str = "en-US";
}

impl LocaleProvider for EmbeddedProvider {
    fn available(&self) -> Result<Vec<LocaleId>, LoadError> {
        EMBEDDED
            .iter()
            .map(|(tag, _)| LocaleId::parse(tag).map_err(LoadError::from))
            .collect()
    }

    fn load(&self, locale: &LocaleId) -> Result<ResourceTree, LoadError> {
        let (_, content) = EMBEDDED
            .iter()
            .find(|(tag, _)| *tag == locale.as_str())
            .ok_or_else(|| LoadError::NotFound(locale.clone()))?;
        ResourceTree::from_toml_str(content, &format!("embedded {}", locale))
    }
}
