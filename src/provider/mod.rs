//! Locale data providers
//!
//! A provider turns some external source (bundled files, a directory on disk)
//! into [`ResourceTree`]s. The registry never reads files itself.

mod dir;
mod embedded;

pub use dir::DirProvider;
pub use embedded::EmbeddedProvider;

use crate::error::LoadError;
use crate::model::{LocaleId, ResourceTree};
use crate::registry::LocaleRegistry;

/// Source of per-locale resource trees
pub trait LocaleProvider {
    /// Locales this provider can load, sorted
    fn available(&self) -> Result<Vec<LocaleId>, LoadError>;

    /// Build the tree for one locale
    fn load(&self, locale: &LocaleId) -> Result<ResourceTree, LoadError>;
}

/// Register every locale the provider offers. Returns how many were registered.
pub fn load_all(registry: &LocaleRegistry, provider: &dyn LocaleProvider) -> Result<usize, LoadError> {
    let locales = provider.available()?;
    for locale in &locales {
        let tree = provider.load(locale)?;
        registry.register(locale.clone(), tree);
    }
    Ok(locales.len())
}

/// Rebuild one locale from the provider and swap it into the registry.
///
/// On error the registry keeps the tree it already had.
pub fn reload(
    registry: &LocaleRegistry,
    provider: &dyn LocaleProvider,
    locale: &LocaleId,
) -> Result<(), LoadError> {
    let tree = provider.load(locale)?;
    registry.register(locale.clone(), tree);
    Ok(())
}
