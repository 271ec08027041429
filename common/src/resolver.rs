//! Fluent-backed translation resolution with default-locale fallback.
//!
//! The resolver parses one Fluent table per catalogue locale at startup
//! and serves lookups from them read-only afterwards. Lookup policy:
//! a requested locale that the catalogue supports selects its own
//! table, anything else selects the default (first) locale's table, and
//! a key absent from the selected table comes back unchanged with a
//! diagnostic rather than an error.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use log::{debug, warn};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

use crate::catalog::LocaleCatalog;
use crate::provider::TranslationProvider;

const LOG_TARGET: &str = "navtitle::resolver";

type LocaleBundle = FluentBundle<FluentResource>;

/// Error raised while assembling translation tables.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Raised when a catalogue locale has no table source.
    #[error("no translation table supplied for catalogue locale `{locale}`")]
    MissingTable {
        /// The catalogue locale left without a table.
        locale: String,
    },
    /// Raised when a table is supplied for a locale outside the catalogue.
    #[error("translation table for `{locale}` has no catalogue entry")]
    UncataloguedTable {
        /// The locale of the surplus table.
        locale: String,
    },
    /// Raised when two tables are supplied for the same locale.
    #[error("translation table for `{locale}` was supplied twice")]
    DuplicateTable {
        /// The locale with more than one table.
        locale: String,
    },
    /// Raised when table source text is not valid Fluent.
    #[error("translation table for `{locale}` is not valid Fluent source")]
    Parse {
        /// The locale whose table failed to parse.
        locale: String,
    },
    /// Raised when a table file cannot be read.
    #[error("failed to read translation table `{path}`")]
    Io {
        /// The table file that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Builder collecting one Fluent source per catalogue locale.
///
/// `build` rejects catalogues with missing tables, surplus tables for
/// uncatalogued locales, duplicate tables, and malformed Fluent source.
#[derive(Debug)]
pub struct TranslationResolverBuilder {
    catalog: LocaleCatalog,
    sources: Vec<(LanguageIdentifier, String)>,
}

impl TranslationResolverBuilder {
    fn new(catalog: LocaleCatalog) -> Self {
        Self {
            catalog,
            sources: Vec::new(),
        }
    }

    /// Supply Fluent `source` text as the table for `locale`.
    #[must_use]
    pub fn table(mut self, locale: LanguageIdentifier, source: impl Into<String>) -> Self {
        self.sources.push((locale, source.into()));
        self
    }

    /// Parse the collected sources into a ready resolver.
    pub fn build(self) -> Result<TranslationResolver, BundleError> {
        let Self { catalog, sources } = self;
        let mut tables = HashMap::new();

        for (locale, source) in sources {
            if !catalog.supports(&locale) {
                return Err(BundleError::UncataloguedTable {
                    locale: locale.to_string(),
                });
            }
            if tables.contains_key(&locale) {
                return Err(BundleError::DuplicateTable {
                    locale: locale.to_string(),
                });
            }

            let resource = FluentResource::try_new(source).map_err(|_| BundleError::Parse {
                locale: locale.to_string(),
            })?;
            let mut bundle = LocaleBundle::new_concurrent(vec![locale.clone()]);
            bundle
                .add_resource(resource)
                .map_err(|_| BundleError::Parse {
                    locale: locale.to_string(),
                })?;
            tables.insert(locale, bundle);
        }

        for locale in catalog.iter() {
            if !tables.contains_key(locale) {
                return Err(BundleError::MissingTable {
                    locale: locale.to_string(),
                });
            }
        }

        debug!(target: LOG_TARGET, "translation tables ready for {catalog}");
        Ok(TranslationResolver { catalog, tables })
    }
}

/// Translation lookup over per-locale Fluent tables.
///
/// Built once at startup and shared read-only afterwards; the bundles
/// use the concurrent Fluent flavour so the resolver can serve every
/// session without locking.
pub struct TranslationResolver {
    catalog: LocaleCatalog,
    tables: HashMap<LanguageIdentifier, LocaleBundle>,
}

impl TranslationResolver {
    /// Start a builder over `catalog`.
    #[must_use]
    pub fn builder(catalog: LocaleCatalog) -> TranslationResolverBuilder {
        TranslationResolverBuilder::new(catalog)
    }

    /// Load one `<bundle>_<locale>.ftl` table per catalogue locale from `dir`.
    ///
    /// Follows the host convention of naming each locale's table file
    /// after the shared bundle name, for example `webapp_de.ftl`.
    pub fn from_directory(
        dir: &Utf8Path,
        bundle: &str,
        catalog: LocaleCatalog,
    ) -> Result<Self, BundleError> {
        let mut builder = Self::builder(catalog.clone());
        for locale in catalog.iter() {
            let path = dir.join(format!("{bundle}_{locale}.ftl"));
            let source = fs::read_to_string(&path)
                .map_err(|error| BundleError::Io { path, source: error })?;
            builder = builder.table(locale.clone(), source);
        }

        builder.build()
    }

    /// The catalogue backing this resolver.
    #[must_use]
    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }
}

impl fmt::Debug for TranslationResolver {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TranslationResolver")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl TranslationProvider for TranslationResolver {
    fn translation(
        &self,
        key: &str,
        locale: Option<&LanguageIdentifier>,
        args: Option<&FluentArgs<'_>>,
    ) -> String {
        let effective = locale
            .filter(|candidate| self.catalog.supports(candidate))
            .unwrap_or_else(|| self.catalog.default_locale());

        let Some(bundle) = self.tables.get(effective) else {
            // build() leaves a table for every catalogue locale
            warn!(target: LOG_TARGET, "no table for locale `{effective}`, returning key `{key}`");
            return key.to_owned();
        };

        let Some(message) = bundle.get_message(key) else {
            warn!(target: LOG_TARGET, "missing translation key `{key}` for locale `{effective}`");
            return key.to_owned();
        };
        let Some(pattern) = message.value() else {
            warn!(target: LOG_TARGET, "missing translation key `{key}` for locale `{effective}`");
            return key.to_owned();
        };

        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, args, &mut errors).into_owned();
        if !errors.is_empty() {
            warn!(
                target: LOG_TARGET,
                "formatting `{key}` for locale `{effective}` reported {} error(s)",
                errors.len(),
            );
        }

        value
    }

    fn provided_locales(&self) -> &[LanguageIdentifier] {
        self.catalog.as_slice()
    }
}
