//! Behaviour-driven coverage for translation resolution.
//!
//! Scenarios exercise table selection, default-locale fallback, and the
//! missing-key degradation that keeps lookups infallible.

use std::cell::RefCell;

use navtitle_common::{LocaleCatalog, TranslationProvider, TranslationResolver};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use unic_langid::{LanguageIdentifier, langid};

#[derive(Default)]
struct ResolverWorld {
    resolver: RefCell<Option<TranslationResolver>>,
    outcome: RefCell<Option<String>>,
}

impl ResolverWorld {
    fn resolve(&self, key: &str, locale: Option<&LanguageIdentifier>) {
        let borrow = self.resolver.borrow();
        let resolver = borrow
            .as_ref()
            .unwrap_or_else(|| panic!("the resolver should have been built"));
        self.outcome
            .borrow_mut()
            .replace(resolver.translation(key, locale, None));
    }

    fn outcome(&self) -> String {
        self.outcome
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("a lookup should have been performed"))
    }
}

#[fixture]
fn world() -> ResolverWorld {
    ResolverWorld::default()
}

#[given("a resolver with English and German greetings")]
fn given_resolver(world: &ResolverWorld) {
    let catalog = LocaleCatalog::parse(["en", "de"]).expect("catalogue should build");
    let resolver = TranslationResolver::builder(catalog)
        .table(langid!("en"), "greeting = Hello\n")
        .table(langid!("de"), "greeting = Hallo\n")
        .build()
        .expect("resolver should build");
    world.resolver.borrow_mut().replace(resolver);
}

#[when("{key} is resolved for locale {locale}")]
fn when_resolved_for(world: &ResolverWorld, key: String, locale: String) {
    let locale: LanguageIdentifier = locale.parse().expect("the step locale should parse");
    world.resolve(&key, Some(&locale));
}

#[when("{key} is resolved without a locale")]
fn when_resolved_without(world: &ResolverWorld, key: String) {
    world.resolve(&key, None);
}

#[then("the resolved text is {expected}")]
fn then_resolved(world: &ResolverWorld, expected: String) {
    assert_eq!(world.outcome(), expected);
}

#[scenario(path = "tests/features/translation_resolution.feature", index = 0)]
fn scenario_supported_locale(world: ResolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/translation_resolution.feature", index = 1)]
fn scenario_unsupported_locale(world: ResolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/translation_resolution.feature", index = 2)]
fn scenario_absent_locale(world: ResolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/translation_resolution.feature", index = 3)]
fn scenario_missing_key(world: ResolverWorld) {
    let _ = world;
}
