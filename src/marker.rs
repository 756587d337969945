use tracing::warn;

use crate::descriptor::TypeDescriptor;

/// Component-kind marker attached to an implementation type.
///
/// [`Service`](ComponentKind::Service) and [`Repository`](ComponentKind::Repository) are
/// specializations of [`Component`](ComponentKind::Component): a type declared with either
/// also satisfies a request for `Component`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Component,
    Service,
    Repository,
}

impl ComponentKind {
    /// Returns `true` if a type declared with `self` satisfies a request for `requested`.
    #[inline]
    #[must_use]
    pub fn is(self, requested: ComponentKind) -> bool {
        requested == ComponentKind::Component || self == requested
    }
}

/// Lifetime marker attached to an implementation type.
///
/// Absence of a marker defaults to [`Singleton`](LifetimeKind::Singleton) at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifetimeKind {
    Singleton,
    Scoped,
    Transient,
}

impl LifetimeKind {
    #[inline]
    #[must_use]
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            LifetimeKind::Singleton => "singleton",
            LifetimeKind::Scoped => "scoped",
            LifetimeKind::Transient => "transient",
        }
    }
}

/// Resolves the lifetime of an implementation type from its declared marker.
///
/// Never fails: an unmarked type resolves to [`LifetimeKind::Singleton`]. The default is
/// logged as a warning, since it can mask a forgotten declaration.
#[must_use]
pub fn resolve_lifetime(implementation: &TypeDescriptor) -> LifetimeKind {
    match implementation.lifetime {
        Some(lifetime) => lifetime,
        None => {
            warn!(
                "No lifetime marker on `{}`, defaulting to singleton",
                implementation.type_info.short_name(),
            );
            LifetimeKind::Singleton
        }
    }
}
