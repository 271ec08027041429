//! Resolver configuration loaded from the host's TOML settings.

use camino::Utf8PathBuf;
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{CatalogError, LocaleCatalog};
use crate::resolver::{BundleError, TranslationResolver};

/// Declarative description of the translation tables to load.
///
/// The host names the supported locales in catalogue order, the bundle
/// base name shared by the table files, and the directory holding one
/// `<bundle>_<locale>.ftl` file per locale:
///
/// ```toml
/// locales = ["en", "de"]
/// bundle = "webapp"
/// directory = "i18n"
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Supported locale tags in catalogue order; the first is the default.
    pub locales: Vec<String>,
    /// Base name shared by the per-locale table files.
    pub bundle: String,
    /// Directory holding the table files.
    pub directory: Utf8PathBuf,
}

/// Error raised while loading resolver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Raised when the configuration document is not valid TOML.
    #[error("resolver configuration is not valid TOML")]
    Toml(#[from] toml::de::Error),
    /// Raised when the configured locales do not form a catalogue.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Raised when the configured tables cannot be assembled.
    #[error(transparent)]
    Bundle(#[from] BundleError),
}

impl ResolverConfig {
    /// Parse a configuration document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Build the catalogue named by `locales`.
    pub fn catalog(&self) -> Result<LocaleCatalog, CatalogError> {
        LocaleCatalog::parse(&self.locales)
    }

    /// Load the resolver this configuration describes.
    pub fn load(&self) -> Result<TranslationResolver, ConfigError> {
        let catalog = self.catalog()?;
        Ok(TranslationResolver::from_directory(
            &self.directory,
            &self.bundle,
            catalog,
        )?)
    }
}
