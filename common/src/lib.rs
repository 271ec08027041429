//! Locale catalogue and translation resolution shared by the navtitle
//! title engine and host-side configuration.
//!
//! The catalogue fixes the supported locales in order, with the first
//! entry acting as the default for every fallback branch. The resolver
//! holds one read-only Fluent table per catalogue locale and degrades
//! missing keys to the key itself instead of failing. Both are built
//! once at startup and shared read-only afterwards.

pub mod catalog;
pub mod config;
pub mod provider;
pub mod resolver;
pub mod testing;

/// Re-export the Fluent argument and value types used by lookups.
pub use fluent_bundle::{FluentArgs, FluentValue};
/// Re-export the locale identifier type used throughout the crate.
pub use unic_langid::LanguageIdentifier;

pub use catalog::{CatalogError, LocaleCatalog};
pub use config::{ConfigError, ResolverConfig};
pub use provider::TranslationProvider;
pub use resolver::{BundleError, TranslationResolver, TranslationResolverBuilder};
