//! Navigation-event surface consumed by the title engine.

use std::any::{self, TypeId};

use unic_langid::LanguageIdentifier;

/// Identity of a navigation target.
///
/// Carries the target's type name alongside its `TypeId` so failure
/// diagnostics can say which view they concern.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ViewId {
    type_id: TypeId,
    name: &'static str,
}

impl ViewId {
    /// Identify the view type `V`.
    #[must_use]
    pub fn of<V: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<V>(),
            name: any::type_name::<V>(),
        }
    }

    pub(crate) const fn type_id(self) -> TypeId {
        self.type_id
    }

    /// The target's type name, used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

/// Pre-navigation notification delivered by the host framework.
///
/// The host constructs one per navigation with the target view and the
/// active session's locale, when it knows one.
#[derive(Clone, Debug)]
pub struct NavigationEvent {
    target: ViewId,
    locale: Option<LanguageIdentifier>,
}

impl NavigationEvent {
    /// Describe navigation to `V` under the session's requested locale.
    #[must_use]
    pub fn new<V: 'static>(locale: Option<LanguageIdentifier>) -> Self {
        Self {
            target: ViewId::of::<V>(),
            locale,
        }
    }

    /// The navigation target's identity.
    #[must_use]
    pub const fn target(&self) -> ViewId {
        self.target
    }

    /// The locale requested by the active session, when known.
    #[must_use]
    pub fn locale(&self) -> Option<&LanguageIdentifier> {
        self.locale.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::ViewId;

    struct FirstView;
    struct SecondView;

    #[test]
    fn identity_is_per_type() {
        assert_eq!(ViewId::of::<FirstView>(), ViewId::of::<FirstView>());
        assert_ne!(ViewId::of::<FirstView>(), ViewId::of::<SecondView>());
    }

    #[test]
    fn name_reports_the_view_type() {
        assert!(ViewId::of::<FirstView>().name().ends_with("FirstView"));
    }
}
