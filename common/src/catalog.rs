//! Locale catalogue shared by translation resolution and title selection.
//!
//! A catalogue is an ordered, duplicate-free list of locales fixed at
//! construction. The first entry is the default used by every fallback
//! branch, so an empty catalogue is a configuration error rather than a
//! silent default.

use std::fmt;
use std::str::FromStr;

use log::debug;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Error raised when a locale catalogue cannot be constructed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Raised when no locales are supplied.
    #[error("a locale catalogue must name at least one locale")]
    Empty,
    /// Raised when a locale tag fails to parse.
    #[error("locale tag `{tag}` is not a valid language identifier")]
    InvalidTag {
        /// The tag that failed to parse.
        tag: String,
    },
}

/// Ordered, duplicate-free set of supported locales.
///
/// ```
/// use navtitle_common::LocaleCatalog;
///
/// let catalog = LocaleCatalog::parse(["en", "de"])?;
/// assert_eq!(catalog.default_locale().to_string(), "en");
/// assert!(catalog.supports(&"de".parse()?));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleCatalog {
    locales: Vec<LanguageIdentifier>,
}

impl LocaleCatalog {
    /// Build a catalogue from locales in declaration order.
    ///
    /// Duplicates keep their first occurrence; supplying no locales at
    /// all is a configuration error.
    pub fn new(
        locales: impl IntoIterator<Item = LanguageIdentifier>,
    ) -> Result<Self, CatalogError> {
        let mut unique: Vec<LanguageIdentifier> = Vec::new();
        for locale in locales {
            if unique.contains(&locale) {
                debug!(target: "navtitle::catalog", "ignoring duplicate locale `{locale}`");
                continue;
            }
            unique.push(locale);
        }

        if unique.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { locales: unique })
    }

    /// Build a catalogue from locale tags such as `"en"` or `"de-AT"`.
    pub fn parse<I, S>(tags: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut locales = Vec::new();
        for tag in tags {
            let tag = tag.as_ref();
            let locale = LanguageIdentifier::from_str(tag)
                .map_err(|_| CatalogError::InvalidTag { tag: tag.to_owned() })?;
            locales.push(locale);
        }

        Self::new(locales)
    }

    /// The default locale used by fallback branches.
    #[must_use]
    pub fn default_locale(&self) -> &LanguageIdentifier {
        // non-empty by construction
        &self.locales[0]
    }

    /// Whether `locale` appears in the catalogue.
    #[must_use]
    pub fn supports(&self, locale: &LanguageIdentifier) -> bool {
        self.locales.contains(locale)
    }

    /// The catalogue entries in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[LanguageIdentifier] {
        &self.locales
    }

    /// Iterate the catalogue entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageIdentifier> {
        self.locales.iter()
    }
}

impl fmt::Display for LocaleCatalog {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<String> = self.locales.iter().map(ToString::to_string).collect();
        write!(formatter, "[{}]", tags.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use unic_langid::langid;

    use super::{CatalogError, LocaleCatalog};

    #[test]
    fn keeps_declaration_order() {
        let catalog = LocaleCatalog::parse(["en", "de", "fr"]).expect("catalogue should build");
        let tags: Vec<String> = catalog.iter().map(ToString::to_string).collect();
        assert_eq!(tags, ["en", "de", "fr"]);
    }

    #[test]
    fn first_entry_is_the_default() {
        let catalog =
            LocaleCatalog::new([langid!("en"), langid!("de")]).expect("catalogue should build");
        assert_eq!(catalog.default_locale(), &langid!("en"));
    }

    #[test]
    fn duplicates_keep_the_first_occurrence() {
        let catalog = LocaleCatalog::parse(["en", "de", "en"]).expect("catalogue should build");
        assert_eq!(catalog.as_slice(), [langid!("en"), langid!("de")]);
    }

    #[test]
    fn rejects_an_empty_catalogue() {
        let locales: Vec<unic_langid::LanguageIdentifier> = Vec::new();
        assert_eq!(LocaleCatalog::new(locales), Err(CatalogError::Empty));
    }

    #[test]
    fn rejects_malformed_tags() {
        assert!(matches!(
            LocaleCatalog::parse(["!!"]),
            Err(CatalogError::InvalidTag { .. })
        ));
    }

    #[rstest]
    #[case("en", true)]
    #[case("de", true)]
    #[case("fr", false)]
    fn reports_supported_locales(#[case] tag: &str, #[case] expected: bool) {
        let catalog = LocaleCatalog::parse(["en", "de"]).expect("catalogue should build");
        let locale = tag.parse().expect("tag should parse");
        assert_eq!(catalog.supports(&locale), expected);
    }

    #[test]
    fn displays_entries_in_order() {
        let catalog = LocaleCatalog::parse(["en", "de"]).expect("catalogue should build");
        assert_eq!(catalog.to_string(), "[en, de]");
    }
}
