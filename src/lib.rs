//! lexicon - UI translation resolver
//!
//! Looks up translated UI strings by `namespace.key` path, substitutes
//! `{identifier}` placeholders, and falls back from the active locale to a
//! fallback locale and finally to the key path itself.
//!
//! # Features
//!
//! - Immutable per-locale resource trees, swapped whole on reload
//! - Process-wide locale registry with a designated fallback locale
//! - Single-pass placeholder interpolation that never fails
//! - Bundled `zh-TW` and `en-US` tables, or `<locale>.toml` files from a directory
//! - Coverage and placeholder checks between locales

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod model;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod service;

pub use error::{ConfigError, LoadError};
pub use interpolate::{interpolate, Params};
pub use model::{Config, Entry, LocaleId, ResourceTree};
pub use registry::LocaleRegistry;
pub use resolver::{KeyResolver, Miss, MissReason};
pub use service::{Resolution, Source, TranslationService};
