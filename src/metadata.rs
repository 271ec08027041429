//! Declarative page-title metadata and its per-view registry.
//!
//! A [`PageTitle`] stands in for the annotation the host framework
//! would attach to a view class: an optional message key, an optional
//! literal default, and an optional named formatter. Titles are
//! registered against the view's type identity at configuration time
//! and only read afterwards.

use std::any::TypeId;
use std::collections::HashMap;

use crate::event::ViewId;

/// Title metadata attached to a navigation target at registration time.
///
/// Empty strings count as unset, matching the empty-string defaults of
/// the declarative form this replaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageTitle {
    message_key: String,
    default_value: String,
    formatter: Option<String>,
}

impl PageTitle {
    /// Title resolved by looking `key` up in the translation tables.
    #[must_use]
    pub fn message_key(key: impl Into<String>) -> Self {
        Self {
            message_key: key.into(),
            ..Self::default()
        }
    }

    /// Title carried as a literal, used when no message key is declared.
    ///
    /// The literal still passes through the translation tables, so a
    /// table entry under the same name wins over the raw text.
    #[must_use]
    pub fn default_value(value: impl Into<String>) -> Self {
        Self {
            default_value: value.into(),
            ..Self::default()
        }
    }

    /// Add a literal fallback to a message-key title.
    #[must_use]
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Route formatting through the registered formatter `name`.
    #[must_use]
    pub fn with_formatter(mut self, name: impl Into<String>) -> Self {
        self.formatter = Some(name.into());
        self
    }

    /// The declared formatter name, when there is one.
    #[must_use]
    pub fn formatter(&self) -> Option<&str> {
        self.formatter.as_deref()
    }

    /// Resolve the effective key.
    ///
    /// A non-empty message key wins; otherwise a non-empty default
    /// value serves as the literal key. Neither present means the
    /// metadata is empty and resolution cannot proceed.
    #[must_use]
    pub fn effective_key(&self) -> Option<&str> {
        if !self.message_key.is_empty() {
            Some(&self.message_key)
        } else if !self.default_value.is_empty() {
            Some(&self.default_value)
        } else {
            None
        }
    }
}

/// Registry mapping navigation-target identity to title metadata.
///
/// Populated once at configuration time; the engine only reads it.
#[derive(Debug, Default)]
pub struct TitleRegistry {
    titles: HashMap<TypeId, PageTitle>,
}

impl TitleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `title` to the view type `V`, replacing any earlier entry.
    pub fn register<V: 'static>(&mut self, title: PageTitle) {
        self.titles.insert(TypeId::of::<V>(), title);
    }

    /// The metadata registered for `view`, if any.
    #[must_use]
    pub fn title_for(&self, view: ViewId) -> Option<&PageTitle> {
        self.titles.get(&view.type_id())
    }
}
