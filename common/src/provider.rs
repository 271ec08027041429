//! Seam between title formatting and translation lookup.

use fluent_bundle::FluentArgs;
use unic_langid::LanguageIdentifier;

/// Translation lookup used by title formatters and the title engine.
///
/// Implementations resolve a key against the table for the requested
/// locale, fall back to their default locale when the request is absent
/// or unsupported, and return the key itself when no entry matches.
/// Lookup never fails; a missing entry is a diagnostic, not an error.
pub trait TranslationProvider {
    /// Resolve `key` for `locale`, applying `args` to the matched message.
    fn translation(
        &self,
        key: &str,
        locale: Option<&LanguageIdentifier>,
        args: Option<&FluentArgs<'_>>,
    ) -> String;

    /// The supported locales in catalogue order.
    ///
    /// The first entry is the default used by fallback branches. The
    /// slice is immutable for the process lifetime.
    fn provided_locales(&self) -> &[LanguageIdentifier];
}
