//! Navigation-time page-title resolution.
//!
//! The engine walks a short-circuiting chain per navigation event:
//! read the target's metadata, resolve the effective key, pick the
//! effective locale, instantiate the declared formatter, format. The
//! first failing step wins, and [`PageTitleEngine::before_enter`] turns
//! it into a diagnostic log entry plus an unchanged page title.

use log::warn;
use navtitle_common::TranslationProvider;
use thiserror::Error;

use crate::event::NavigationEvent;
use crate::formatter::{FormatterError, FormatterRegistry};
use crate::metadata::TitleRegistry;
use crate::selection::select_title_locale;

const LOG_TARGET: &str = "navtitle::engine";

/// Error raised while resolving a page title for one navigation event.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    /// Raised when the target has no registered title metadata.
    #[error("no title metadata registered for `{target}`")]
    MissingMetadata {
        /// The navigation target's type name.
        target: &'static str,
    },
    /// Raised when the metadata names neither a key nor a default.
    #[error("title metadata for `{target}` names neither a message key nor a default value")]
    EmptyMetadata {
        /// The navigation target's type name.
        target: &'static str,
    },
    /// Raised when no locale was requested and the provider's locale
    /// list is empty.
    #[error("no locale requested and the provider's locale list is empty")]
    NoLocale,
    /// Raised when the declared formatter cannot be built or applied.
    #[error(transparent)]
    Formatter(#[from] FormatterError),
}

/// Computes page titles for navigation events.
///
/// Holds the title and formatter registries assembled at configuration
/// time and reads them on every event. Failures never cross the
/// navigation boundary.
#[derive(Debug, Default)]
pub struct PageTitleEngine {
    titles: TitleRegistry,
    formatters: FormatterRegistry,
}

impl PageTitleEngine {
    /// Build an engine over the given registries.
    #[must_use]
    pub fn new(titles: TitleRegistry, formatters: FormatterRegistry) -> Self {
        Self { titles, formatters }
    }

    /// Resolve the title for `event`, surfacing the failure cause.
    pub fn try_resolve(
        &self,
        event: &NavigationEvent,
        provider: &dyn TranslationProvider,
    ) -> Result<String, TitleError> {
        let target = event.target();
        let title = self
            .titles
            .title_for(target)
            .ok_or(TitleError::MissingMetadata {
                target: target.name(),
            })?;
        let key = title.effective_key().ok_or(TitleError::EmptyMetadata {
            target: target.name(),
        })?;

        let choice = select_title_locale(event.locale(), provider.provided_locales())?;
        choice.log_outcome(target.name());

        let formatter = self.formatters.instantiate(title.formatter())?;
        Ok(formatter.format_title(provider, choice.locale(), key)?)
    }

    /// Pre-navigation hook.
    ///
    /// Returns the computed title for the host to apply, or `None` when
    /// resolution failed and the current title must stay untouched.
    /// Every failure is logged here and propagates no further.
    #[must_use]
    pub fn before_enter(
        &self,
        event: &NavigationEvent,
        provider: &dyn TranslationProvider,
    ) -> Option<String> {
        match self.try_resolve(event, provider) {
            Ok(title) => Some(title),
            Err(error) => {
                warn!(
                    target: LOG_TARGET,
                    "leaving page title unchanged for `{}`: {error}",
                    event.target().name(),
                );
                None
            }
        }
    }
}
