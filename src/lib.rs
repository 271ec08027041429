//! Annotation-style localised page titles for server-side navigation.
//!
//! Views declare their title once, at registration time, as a
//! [`PageTitle`] entry in a [`TitleRegistry`]: a message key resolved
//! through the translation tables, an optional literal default, and an
//! optional named formatter. On every navigation event the
//! [`PageTitleEngine`] picks an effective locale from the provider's
//! catalogue, instantiates the declared formatter, and returns the
//! title for the host to apply.
//!
//! Every failure path ends in a diagnostic log entry and an unchanged
//! page title. Title resolution must never crash page rendering, so
//! nothing in this crate propagates an error past the navigation hook.
//!
//! ```
//! use navtitle::{FormatterRegistry, NavigationEvent, PageTitle, PageTitleEngine, TitleRegistry};
//! use navtitle_common::testing::StaticProvider;
//! use unic_langid::langid;
//!
//! struct DashboardView;
//!
//! let provider = StaticProvider::new([langid!("en"), langid!("de")])
//!     .with_translation(&langid!("de"), "view.dashboard", "Übersicht");
//!
//! let mut titles = TitleRegistry::new();
//! titles.register::<DashboardView>(PageTitle::message_key("view.dashboard"));
//! let engine = PageTitleEngine::new(titles, FormatterRegistry::new());
//!
//! let event = NavigationEvent::new::<DashboardView>(Some(langid!("de")));
//! assert_eq!(engine.before_enter(&event, &provider), Some("Übersicht".into()));
//! ```

pub mod engine;
pub mod event;
pub mod formatter;
pub mod metadata;
pub mod selection;

pub use engine::{PageTitleEngine, TitleError};
pub use event::{NavigationEvent, ViewId};
pub use formatter::{
    DefaultTitleFormatter, FormatterError, FormatterFactory, FormatterRegistry, TitleFormatter,
};
pub use metadata::{PageTitle, TitleRegistry};
pub use selection::{LocaleChoice, TitleLocaleSource, select_title_locale};
