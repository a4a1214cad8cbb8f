//! Error types for locale configuration and loading

use std::path::PathBuf;

use thiserror::Error;

use crate::model::LocaleId;

/// Wiring mistakes: bad locale tags, or activating a locale that was never registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("locale '{0}' is not registered")]
    UnknownLocale(LocaleId),

    #[error("invalid locale tag: '{0}'")]
    InvalidLocale(String),
}

/// Errors raised while turning provider data into resource trees.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("no locale data for '{0}'")]
    NotFound(LocaleId),

    #[error("duplicate key '{key}' in namespace '{namespace}'")]
    DuplicateKey { namespace: String, key: String },

    #[error("invalid key '{key}' in namespace '{namespace}': names must be non-empty and contain no '.'")]
    InvalidKey { namespace: String, key: String },

    #[error(transparent)]
    Locale(#[from] ConfigError),
}
