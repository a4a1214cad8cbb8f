//! Process-wide locale → resource tree table

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::ConfigError;
use crate::model::{LocaleId, ResourceTree};

/// Owns every registered [`ResourceTree`] and the fallback designation.
///
/// Written at startup or on reload, read on every translation. Trees are
/// handed out as `Arc`s, so replacing a locale never disturbs a reader that
/// already holds the previous tree.
#[derive(Debug, Default)]
pub struct LocaleRegistry {
    trees: RwLock<HashMap<LocaleId, Arc<ResourceTree>>>,
    fallback: RwLock<Option<LocaleId>>,
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace the tree for `locale`, returning the replaced tree
    pub fn register(&self, locale: LocaleId, tree: ResourceTree) -> Option<Arc<ResourceTree>> {
        let entries = tree.len();
        let previous = self
            .trees
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(locale.clone(), Arc::new(tree));

        if previous.is_some() {
            tracing::info!(%locale, entries, "replaced locale");
        } else {
            tracing::info!(%locale, entries, "registered locale");
        }
        previous
    }

    pub fn get(&self, locale: &LocaleId) -> Option<Arc<ResourceTree>> {
        self.trees
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(locale)
            .cloned()
    }

    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.trees
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(locale)
    }

    /// Registered locales, sorted
    pub fn locales(&self) -> Vec<LocaleId> {
        let mut locales: Vec<LocaleId> = self
            .trees
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        locales.sort();
        locales
    }

    /// Designate the fallback locale. It must already be registered.
    pub fn set_fallback(&self, locale: &LocaleId) -> Result<(), ConfigError> {
        if !self.contains(locale) {
            return Err(ConfigError::UnknownLocale(locale.clone()));
        }
        *self.fallback.write().unwrap_or_else(PoisonError::into_inner) = Some(locale.clone());
        tracing::debug!(%locale, "fallback locale set");
        Ok(())
    }

    pub fn fallback(&self) -> Option<LocaleId> {
        self.fallback
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Pick the registered locale that best serves `requested`.
    ///
    /// An exact match wins; otherwise the first registered locale (in sorted
    /// order) with the same language subtag.
    pub fn negotiate(&self, requested: &LocaleId) -> Option<LocaleId> {
        if self.contains(requested) {
            return Some(requested.clone());
        }
        self.locales()
            .into_iter()
            .find(|candidate| candidate.language() == requested.language())
    }
}
