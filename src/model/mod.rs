//! Core data models for lexicon

mod config;
mod locale;
mod tree;

pub use config::{Config, LocaleConfig, LogConfig};
pub use locale::LocaleId;
pub use tree::{Entry, Namespace, ResourceTree, TreeBuilder};
