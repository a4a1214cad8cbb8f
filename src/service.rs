//! Translation facade: active locale, fallback chain and interpolation

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::ConfigError;
use crate::interpolate::{interpolate, Params};
use crate::model::LocaleId;
use crate::registry::LocaleRegistry;
use crate::resolver::KeyResolver;

/// Where a resolved template came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The active locale had the key
    Active(LocaleId),
    /// The active locale missed and the fallback locale had the key
    Fallback(LocaleId),
    /// Neither locale had the key; the key path itself is the template
    RawKey,
}

/// Outcome of a lookup before interpolation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub template: String,
    pub source: Source,
}

/// Translates key paths for the UI.
///
/// The service does not own any resource tree. It reads them from the shared
/// registry on each call and only tracks which locale is active, so a reload
/// in the registry is visible to the next translation.
#[derive(Debug)]
pub struct TranslationService {
    registry: Arc<LocaleRegistry>,
    active: RwLock<LocaleId>,
}

impl TranslationService {
    /// Designate `fallback` in the registry and start with it as the active locale
    pub fn init(registry: Arc<LocaleRegistry>, fallback: &LocaleId) -> Result<Self, ConfigError> {
        registry.set_fallback(fallback)?;
        Ok(Self {
            registry,
            active: RwLock::new(fallback.clone()),
        })
    }

    pub fn registry(&self) -> &Arc<LocaleRegistry> {
        &self.registry
    }

    /// The active locale
    pub fn locale(&self) -> LocaleId {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Switch the active locale. On error the previous locale stays active.
    pub fn set_locale(&self, locale: &LocaleId) -> Result<(), ConfigError> {
        if !self.registry.contains(locale) {
            return Err(ConfigError::UnknownLocale(locale.clone()));
        }
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = locale.clone();
        tracing::debug!(%locale, "active locale changed");
        Ok(())
    }

    /// Find the template for `key_path`: active locale, then fallback, then the raw key
    pub fn resolve(&self, key_path: &str) -> Resolution {
        let active = self.locale();

        if let Some(tree) = self.registry.get(&active) {
            match KeyResolver::resolve(&tree, key_path) {
                Ok(template) => {
                    return Resolution {
                        template: template.to_string(),
                        source: Source::Active(active),
                    }
                }
                Err(miss) => {
                    tracing::debug!(locale = %active, reason = %miss.reason, key_path, "active locale miss");
                }
            }
        }

        if let Some(fallback) = self.registry.fallback().filter(|f| *f != active) {
            if let Some(tree) = self.registry.get(&fallback) {
                match KeyResolver::resolve(&tree, key_path) {
                    Ok(template) => {
                        return Resolution {
                            template: template.to_string(),
                            source: Source::Fallback(fallback),
                        }
                    }
                    Err(miss) => {
                        tracing::debug!(locale = %fallback, reason = %miss.reason, key_path, "fallback locale miss");
                    }
                }
            }
        }

        tracing::debug!(key_path, "no translation found, showing key");
        Resolution {
            template: key_path.to_string(),
            source: Source::RawKey,
        }
    }

    /// Translate without parameters. Never fails.
    pub fn translate(&self, key_path: &str) -> String {
        self.translate_with(key_path, &Params::new())
    }

    /// Translate and substitute `{identifier}` placeholders. Never fails.
    pub fn translate_with(&self, key_path: &str, params: &Params) -> String {
        let Resolution { template, .. } = self.resolve(key_path);
        if params.is_empty() {
            return template;
        }
        interpolate(&template, params).into_owned()
    }
}

/// Translate through a [`TranslationService`].
///
/// ```
/// use std::sync::Arc;
/// use lexicon::{t, LocaleId, LocaleRegistry, ResourceTree, TranslationService};
///
/// let registry = Arc::new(LocaleRegistry::new());
/// let tree = ResourceTree::from_toml_str("[foo]\nbar = \"Hello {name}\"", "inline").unwrap();
/// let en = LocaleId::parse("en-US").unwrap();
/// registry.register(en.clone(), tree);
/// let i18n = TranslationService::init(registry, &en).unwrap();
///
/// assert_eq!(t!(i18n, "foo.bar", "name" => "Ann"), "Hello Ann");
/// assert_eq!(t!(i18n, "foo.bar"), "Hello {name}");
/// ```
#[macro_export]
macro_rules! t {
    ($service:expr, $key:expr) => {
        $service.translate($key)
    };
    ($service:expr, $key:expr, $($name:expr => $value:expr),+ $(,)?) => {
        $service.translate_with($key, &$crate::Params::new()$(.with($name, &$value))+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResourceTree;

    fn locale(tag: &str) -> LocaleId {
        LocaleId::parse(tag).unwrap()
    }

    fn tree(toml: &str) -> ResourceTree {
        ResourceTree::from_toml_str(toml, "inline").unwrap()
    }

    /// zh-TW active, en-US fallback; `foo.bar` only exists in en-US
    fn service() -> TranslationService {
        let registry = Arc::new(LocaleRegistry::new());
        registry.register(
            locale("zh-TW"),
            tree("[store]\naddRepeatContentTips = \"內容重複：{msg}，請重新輸入\"\n"),
        );
        registry.register(
            locale("en-US"),
            tree(
                "[store]\naddRepeatContentTips = \"Duplicate content: {msg}\"\n\
                 [foo]\nbar = \"Hello {name}\"\n",
            ),
        );
        let service = TranslationService::init(registry, &locale("en-US")).unwrap();
        service.set_locale(&locale("zh-TW")).unwrap();
        service
    }

    #[test]
    fn test_init_requires_registered_fallback() {
        let registry = Arc::new(LocaleRegistry::new());
        let err = TranslationService::init(registry, &locale("en-US")).unwrap_err();
        assert_eq!(err, ConfigError::UnknownLocale(locale("en-US")));
    }

    #[test]
    fn test_translate_from_active_locale() {
        let service = service();
        assert_eq!(
            service.translate_with("store.addRepeatContentTips", &Params::from([("msg", "A")])),
            "內容重複：A，請重新輸入"
        );
        assert_eq!(
            service.resolve("store.addRepeatContentTips").source,
            Source::Active(locale("zh-TW"))
        );
    }

    #[test]
    fn test_translate_without_params_keeps_placeholder() {
        let service = service();
        assert_eq!(
            service.translate("store.addRepeatContentTips"),
            "內容重複：{msg}，請重新輸入"
        );
    }

    #[test]
    fn test_translate_falls_back() {
        let service = service();
        assert_eq!(
            service.translate_with("foo.bar", &Params::new().with("name", "Ann")),
            "Hello Ann"
        );
        assert_eq!(
            service.resolve("foo.bar").source,
            Source::Fallback(locale("en-US"))
        );
    }

    #[test]
    fn test_non_text_active_entry_falls_back() {
        let registry = Arc::new(LocaleRegistry::new());
        registry.register(locale("zh-TW"), tree("[setting]\nlimit = 1\n"));
        registry.register(locale("en-US"), tree("[setting]\nlimit = \"x\"\n"));
        let service = TranslationService::init(registry, &locale("en-US")).unwrap();
        service.set_locale(&locale("zh-TW")).unwrap();

        assert_eq!(service.translate("setting.limit"), "x");
        assert_eq!(
            service.resolve("setting.limit").source,
            Source::Fallback(locale("en-US"))
        );
    }

    #[test]
    fn test_translate_returns_raw_key() {
        let service = service();
        assert_eq!(service.translate("store.missingKey"), "store.missingKey");
        assert_eq!(service.resolve("store.missingKey").source, Source::RawKey);
    }

    #[test]
    fn test_raw_key_is_interpolated_too() {
        let service = service();
        assert_eq!(
            service.translate_with("missing.{name}", &Params::new().with("name", "x")),
            "missing.x"
        );
    }

    #[test]
    fn test_set_unknown_locale_keeps_previous() {
        let service = service();
        let err = service.set_locale(&locale("fr-FR")).unwrap_err();
        assert_eq!(err, ConfigError::UnknownLocale(locale("fr-FR")));
        assert_eq!(service.locale(), locale("zh-TW"));
    }

    #[test]
    fn test_reload_visible_to_next_translation() {
        let service = service();
        service.registry().register(
            locale("zh-TW"),
            tree("[store]\naddRepeatContentTips = \"重複：{msg}\"\n"),
        );
        assert_eq!(
            service.translate_with("store.addRepeatContentTips", &Params::from([("msg", "B")])),
            "重複：B"
        );
    }

    #[test]
    fn test_macro_forms() {
        let service = service();
        assert_eq!(t!(service, "foo.bar"), "Hello {name}");
        assert_eq!(t!(service, "foo.bar", "name" => "Ann"), "Hello Ann");
        let count = 3;
        assert_eq!(
            t!(service, "store.addRepeatContentTips", "msg" => count),
            "內容重複：3，請重新輸入"
        );
    }
}
