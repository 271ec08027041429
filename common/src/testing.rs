//! Test doubles shared by resolver and title-engine suites.

use std::collections::HashMap;

use fluent_bundle::FluentArgs;
use unic_langid::LanguageIdentifier;

use crate::provider::TranslationProvider;

/// Table-backed provider double mirroring the production fallback policy.
///
/// Lookup selects the table for a supported requested locale, falls
/// back to the first configured locale otherwise, and returns the key
/// itself on a miss, without touching any Fluent machinery. An empty
/// locale list is permitted so suites can exercise the engine's
/// no-locale failure path.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    locales: Vec<LanguageIdentifier>,
    tables: HashMap<LanguageIdentifier, HashMap<String, String>>,
}

impl StaticProvider {
    /// Create a provider supporting `locales` in catalogue order.
    #[must_use]
    pub fn new(locales: impl IntoIterator<Item = LanguageIdentifier>) -> Self {
        Self {
            locales: locales.into_iter().collect(),
            tables: HashMap::new(),
        }
    }

    /// Add a translation for `locale`.
    #[must_use]
    pub fn with_translation(mut self, locale: &LanguageIdentifier, key: &str, value: &str) -> Self {
        self.tables
            .entry(locale.clone())
            .or_default()
            .insert(key.to_owned(), value.to_owned());
        self
    }
}

impl TranslationProvider for StaticProvider {
    fn translation(
        &self,
        key: &str,
        locale: Option<&LanguageIdentifier>,
        _args: Option<&FluentArgs<'_>>,
    ) -> String {
        locale
            .filter(|candidate| self.locales.contains(candidate))
            .or_else(|| self.locales.first())
            .and_then(|effective| self.tables.get(effective))
            .and_then(|table| table.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }

    fn provided_locales(&self) -> &[LanguageIdentifier] {
        &self.locales
    }
}

#[cfg(test)]
mod tests {
    use unic_langid::langid;

    use super::StaticProvider;
    use crate::provider::TranslationProvider;

    #[test]
    fn resolves_from_the_requested_table() {
        let provider = StaticProvider::new([langid!("en"), langid!("de")])
            .with_translation(&langid!("de"), "greeting", "Hallo");
        assert_eq!(
            provider.translation("greeting", Some(&langid!("de")), None),
            "Hallo",
        );
    }

    #[test]
    fn falls_back_to_the_first_locale() {
        let provider = StaticProvider::new([langid!("en"), langid!("de")])
            .with_translation(&langid!("en"), "greeting", "Hello");
        assert_eq!(
            provider.translation("greeting", Some(&langid!("fr")), None),
            "Hello",
        );
    }

    #[test]
    fn misses_degrade_to_the_key() {
        let provider = StaticProvider::new([langid!("en")]);
        assert_eq!(provider.translation("greeting", None, None), "greeting");
    }
}
