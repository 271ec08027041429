//! Pluggable title formatting over the translation provider.
//!
//! A formatter turns the effective key and locale into the final
//! display string. The default simply delegates to the provider; hosts
//! register richer formatters under a name and reference that name from
//! a view's title metadata, so construction happens by lookup instead
//! of dynamic class instantiation.

use std::collections::HashMap;
use std::fmt;

use navtitle_common::TranslationProvider;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Error raised while constructing or applying a title formatter.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatterError {
    /// Raised when no factory is registered under the requested name.
    #[error("no title formatter registered under `{name}`")]
    Unknown {
        /// The name the metadata asked for.
        name: String,
    },
    /// Raised when a registered factory fails to produce a formatter.
    #[error("constructing title formatter `{name}` failed: {reason}")]
    Construction {
        /// The name of the failing factory.
        name: String,
        /// The factory's own account of the failure.
        reason: String,
    },
    /// Raised when a formatter rejects its inputs.
    #[error("formatting title for key `{key}` failed: {reason}")]
    Application {
        /// The effective key being formatted.
        key: String,
        /// The formatter's own account of the failure.
        reason: String,
    },
}

/// Capability turning an effective key and locale into a display title.
///
/// Implementations must be pure functions of their three inputs with no
/// shared mutable state. The engine catches every error and treats it
/// as a failure signal; nothing a formatter returns can abort
/// navigation.
pub trait TitleFormatter {
    /// Produce the title for `key` under `locale`.
    fn format_title(
        &self,
        provider: &dyn TranslationProvider,
        locale: &LanguageIdentifier,
        key: &str,
    ) -> Result<String, FormatterError>;
}

/// Pass-through formatter delegating straight to the provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTitleFormatter;

impl TitleFormatter for DefaultTitleFormatter {
    fn format_title(
        &self,
        provider: &dyn TranslationProvider,
        locale: &LanguageIdentifier,
        key: &str,
    ) -> Result<String, FormatterError> {
        Ok(provider.translation(key, Some(locale), None))
    }
}

/// Factory producing a fresh formatter per navigation event.
pub type FormatterFactory =
    Box<dyn Fn() -> Result<Box<dyn TitleFormatter>, FormatterError> + Send + Sync>;

/// Registry mapping formatter names to factories.
///
/// Resolved at configuration time; instantiation happens per
/// navigation so formatters stay stateless.
#[derive(Default)]
pub struct FormatterRegistry {
    factories: HashMap<String, FormatterFactory>,
}

impl FormatterRegistry {
    /// Create a registry knowing only the pass-through default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`, replacing any earlier entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Box<dyn TitleFormatter>, FormatterError> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Instantiate the formatter for `name`, or the pass-through
    /// default when the metadata names none.
    pub fn instantiate(
        &self,
        name: Option<&str>,
    ) -> Result<Box<dyn TitleFormatter>, FormatterError> {
        match name {
            None => Ok(Box::new(DefaultTitleFormatter)),
            Some(name) => {
                let factory = self
                    .factories
                    .get(name)
                    .ok_or_else(|| FormatterError::Unknown {
                        name: name.to_owned(),
                    })?;
                factory()
            }
        }
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        formatter
            .debug_struct("FormatterRegistry")
            .field("names", &names)
            .finish()
    }
}
