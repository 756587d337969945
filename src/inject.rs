use alloc::sync::Arc;
use core::any::{Any, TypeId};

use crate::{any::AnyInstance, errors::ActivationErrorKind};

/// Extractor for a resolved dependency handle.
///
/// Component constructors take `Inject<T>` parameters and usually destructure them:
///
/// ```rust
/// use autoreg::Inject;
///
/// trait UserRepo: Send + Sync {}
///
/// struct UserService {
///     repo: std::sync::Arc<dyn UserRepo + Send + Sync>,
/// }
///
/// impl UserService {
///     fn new(Inject(repo): Inject<dyn UserRepo + Send + Sync>) -> Self {
///         Self { repo }
///     }
/// }
/// ```
pub struct Inject<Dep: ?Sized>(pub Arc<Dep>);

impl<Dep: ?Sized + Send + Sync + 'static> Inject<Dep> {
    /// Recovers the typed handle from a provider-supplied instance.
    pub fn from_any(instance: AnyInstance) -> Result<Self, ActivationErrorKind> {
        let actual = (*instance).type_id();
        instance
            .downcast::<Arc<Dep>>()
            .map(|handle| Self((*handle).clone()))
            .map_err(|_| ActivationErrorKind::IncorrectType {
                expected: TypeId::of::<Arc<Dep>>(),
                actual,
            })
    }
}
