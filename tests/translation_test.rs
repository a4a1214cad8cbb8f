use std::sync::Arc;
use std::thread;

use lexicon::provider::{load_all, EmbeddedProvider};
use lexicon::{
    t, ConfigError, KeyResolver, LocaleId, LocaleRegistry, Params, ResourceTree, Source,
    TranslationService,
};

fn locale(tag: &str) -> LocaleId {
    LocaleId::parse(tag).unwrap()
}

fn tree(toml: &str) -> ResourceTree {
    ResourceTree::from_toml_str(toml, "inline").unwrap()
}

fn embedded_service() -> TranslationService {
    let registry = Arc::new(LocaleRegistry::new());
    load_all(&registry, &EmbeddedProvider).unwrap();
    TranslationService::init(registry, &locale(EmbeddedProvider::FALLBACK)).unwrap()
}

#[test]
fn test_every_key_resolves_in_its_own_locale() {
    let service = embedded_service();
    for tag in ["zh-TW", "en-US"] {
        service.set_locale(&locale(tag)).unwrap();
        let tree = service.registry().get(&locale(tag)).unwrap();
        for key in tree.keys() {
            let resolution = service.resolve(&key);
            assert_eq!(resolution.source, Source::Active(locale(tag)), "{tag} {key}");
            assert_eq!(
                service.translate(&key),
                KeyResolver::resolve(&tree, &key).unwrap(),
                "{tag} {key}"
            );
        }
    }
}

#[test]
fn test_store_scenarios_single_locale() {
    let registry = Arc::new(LocaleRegistry::new());
    registry.register(
        locale("zh-TW"),
        tree("[store]\naddRepeatContentTips = \"內容重複：{msg}，請重新輸入\"\n"),
    );
    let service = TranslationService::init(registry, &locale("zh-TW")).unwrap();

    assert_eq!(
        service.translate_with("store.addRepeatContentTips", &Params::from([("msg", "A")])),
        "內容重複：A，請重新輸入"
    );
    assert_eq!(
        service.translate("store.addRepeatContentTips"),
        "內容重複：{msg}，請重新輸入"
    );
    assert_eq!(service.translate("store.missingKey"), "store.missingKey");
}

#[test]
fn test_fallback_scenario() {
    let registry = Arc::new(LocaleRegistry::new());
    registry.register(locale("zh-TW"), tree("[common]\nadd = \"新增\"\n"));
    registry.register(locale("en-US"), tree("[foo]\nbar = \"Hello {name}\"\n"));

    let service = TranslationService::init(registry, &locale("en-US")).unwrap();
    service.set_locale(&locale("zh-TW")).unwrap();

    assert_eq!(
        service.translate_with("foo.bar", &Params::new().with("name", "Ann")),
        "Hello Ann"
    );
    assert_eq!(t!(service, "common.add"), "新增");
}

#[test]
fn test_missing_in_both_locales_returns_key() {
    let service = embedded_service();
    service.set_locale(&locale("zh-TW")).unwrap();
    for key in ["store.missingKey", "nowhere.at.all", "common", ""] {
        assert_eq!(service.translate(key), key);
    }
}

#[test]
fn test_fallback_to_embedded_english() {
    let registry = Arc::new(LocaleRegistry::new());
    load_all(&registry, &EmbeddedProvider).unwrap();
    // A partial zh-TW table replaces the bundled one
    registry.register(locale("zh-TW"), tree("[common]\nadd = \"加入\"\n"));

    let service = TranslationService::init(Arc::clone(&registry), &locale("en-US")).unwrap();
    service.set_locale(&locale("zh-TW")).unwrap();

    assert_eq!(service.translate("common.add"), "加入");
    assert_eq!(
        t!(service, "store.importRepeatTitle", "msg" => "Prompt"),
        "Title repeatedly skipped: Prompt"
    );
}

#[test]
fn test_set_locale_rejects_unregistered() {
    let service = embedded_service();
    service.set_locale(&locale("zh-TW")).unwrap();

    assert_eq!(
        service.set_locale(&locale("ja-JP")),
        Err(ConfigError::UnknownLocale(locale("ja-JP")))
    );
    assert_eq!(service.locale(), locale("zh-TW"));
}

#[test]
fn test_concurrent_reload_is_atomic() {
    let registry = Arc::new(LocaleRegistry::new());
    registry.register(locale("zh-TW"), tree("[chat]\ncopy = \"複製\"\ncopied = \"複製成功\"\n"));
    let service = TranslationService::init(Arc::clone(&registry), &locale("zh-TW")).unwrap();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..500 {
                    let copy = service.translate("chat.copy");
                    let copied = service.translate("chat.copied");
                    assert!(copy == "複製" || copy == "拷貝", "unexpected {copy}");
                    assert!(copied == "複製成功" || copied == "拷貝成功", "unexpected {copied}");
                }
            });
        }
        scope.spawn(|| {
            for i in 0..200 {
                let toml = if i % 2 == 0 {
                    "[chat]\ncopy = \"拷貝\"\ncopied = \"拷貝成功\"\n"
                } else {
                    "[chat]\ncopy = \"複製\"\ncopied = \"複製成功\"\n"
                };
                registry.register(locale("zh-TW"), tree(toml));
            }
        });
    });
}

#[test]
fn test_service_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TranslationService>();
    assert_send_sync::<LocaleRegistry>();
}
