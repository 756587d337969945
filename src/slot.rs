use alloc::sync::Arc;
use core::any::{Any, TypeId};

use parking_lot::RwLock;
use tracing::debug;

use crate::{any::AnyInstance, errors::ActivationErrorKind};

/// Process-wide injection slot shared across all instances of a component.
///
/// Declared as a `static` by the component author and referenced from the `shared:` section
/// of a [`component!`](crate::component) declaration. The first activation that finds the
/// slot empty stores the resolved dependency; every later activation skips it.
pub struct SharedSlot<T: ?Sized + Send + Sync + 'static> {
    value: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized + Send + Sync + 'static> SharedSlot<T> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { value: RwLock::new(None) }
    }

    /// Returns the stored dependency, if wiring has run.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<Arc<T>> {
        self.value.read().clone()
    }

    #[inline]
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value.read().is_some()
    }
}

impl<T: ?Sized + Send + Sync + 'static> Default for SharedSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased view of a [`SharedSlot`], as referenced by field metadata.
pub trait SlotOps: Send + Sync {
    fn is_set(&self) -> bool;

    /// Stores `value` unless an earlier activation already did; the first write wins.
    fn store(&self, value: AnyInstance) -> Result<(), ActivationErrorKind>;
}

impl<T: ?Sized + Send + Sync + 'static> SlotOps for SharedSlot<T> {
    fn is_set(&self) -> bool {
        SharedSlot::is_set(self)
    }

    fn store(&self, value: AnyInstance) -> Result<(), ActivationErrorKind> {
        let actual = (*value).type_id();
        let handle = value.downcast::<Arc<T>>().map_err(|_| ActivationErrorKind::IncorrectType {
            expected: TypeId::of::<Arc<T>>(),
            actual,
        })?;

        // Re-checked under the write lock: two racing first-time activations cannot both win.
        let mut guard = self.value.write();
        if guard.is_none() {
            *guard = Some((*handle).clone());
        } else {
            debug!("Shared slot already initialized, keeping existing value");
        }
        Ok(())
    }
}
