//! Effective-locale selection for title resolution.
//!
//! Selection evaluates its rules first-match-wins: a requested locale
//! present in the provided list is used verbatim, while an absent or
//! unsupported request falls back to the first provided locale. Both
//! fallback branches deliberately land on the same default.

use std::fmt;

use log::debug;
use unic_langid::LanguageIdentifier;

use crate::engine::TitleError;

/// Source of the effective title locale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TitleLocaleSource {
    /// The session's requested locale, present in the provided list.
    Requested,
    /// The first provided locale, covering both an absent and an
    /// unsupported request.
    CatalogDefault,
}

impl fmt::Display for TitleLocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Requested => formatter.write_str("requested locale"),
            Self::CatalogDefault => formatter.write_str("catalogue default"),
        }
    }
}

/// Outcome of effective-locale selection including provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleChoice {
    locale: LanguageIdentifier,
    source: TitleLocaleSource,
}

impl LocaleChoice {
    const fn new(locale: LanguageIdentifier, source: TitleLocaleSource) -> Self {
        Self { locale, source }
    }

    /// The effective locale.
    #[must_use]
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Where the effective locale came from.
    #[must_use]
    pub const fn source(&self) -> TitleLocaleSource {
        self.source
    }

    /// Emit a debug log summarising the selection.
    pub fn log_outcome(&self, target_name: &str) {
        debug!(
            target: "navtitle::selection",
            "resolved {} `{}` for `{target_name}`",
            self.source,
            self.locale,
        );
    }
}

/// Pick the effective locale for a title lookup.
///
/// An empty `provided` list cannot satisfy any request and yields
/// [`TitleError::NoLocale`]; a correctly configured provider never has
/// one.
pub fn select_title_locale(
    requested: Option<&LanguageIdentifier>,
    provided: &[LanguageIdentifier],
) -> Result<LocaleChoice, TitleError> {
    let Some(default) = provided.first() else {
        return Err(TitleError::NoLocale);
    };

    match requested {
        Some(locale) if provided.contains(locale) => Ok(LocaleChoice::new(
            locale.clone(),
            TitleLocaleSource::Requested,
        )),
        _ => Ok(LocaleChoice::new(
            default.clone(),
            TitleLocaleSource::CatalogDefault,
        )),
    }
}
