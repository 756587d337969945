use alloc::{sync::Arc, vec::Vec};

use tracing::debug;

use crate::{
    any::AnyInstance,
    descriptor::{Field, FieldTarget, TypeDescriptor},
    errors::ActivationErrorKind,
    provider::DependencyProvider,
};

/// Construction strategy shared by every descriptor of one implementation type.
///
/// Holds only immutable wiring metadata; nothing is instantiated before the external
/// container first activates a descriptor.
#[derive(Clone)]
pub struct Factory {
    meta: Arc<TypeDescriptor>,
}

impl Factory {
    #[inline]
    #[must_use]
    pub(crate) fn new(meta: TypeDescriptor) -> Self {
        Self { meta: Arc::new(meta) }
    }

    /// Returns `true` if both factories share one wiring record.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.meta, &other.meta)
    }

    /// Constructs and wires one instance of the implementation type.
    ///
    /// Requires exactly one declared constructor; its parameters are resolved from
    /// `provider` in declared order, then marked fields are wired onto the fresh instance.
    /// A process-wide field whose slot already holds a value is skipped. Any resolution
    /// failure aborts the activation; no partial instance is returned.
    ///
    /// The returned handle carries the concrete type; descriptor casts convert it to the
    /// requested service identity.
    pub fn activate(&self, provider: &dyn DependencyProvider) -> Result<AnyInstance, ActivationErrorKind> {
        let type_info = self.meta.type_info;

        let constructor = match self.meta.constructors.as_slice() {
            [constructor] => constructor,
            constructors => {
                return Err(ActivationErrorKind::AmbiguousConstructor {
                    type_info,
                    found: constructors.len(),
                })
            }
        };

        let mut resolved = Vec::with_capacity(constructor.params.len());
        for param in &constructor.params {
            resolved.push(
                provider
                    .get_required(*param)
                    .map_err(|source| ActivationErrorKind::UnresolvedDependency {
                        type_info,
                        dependency: *param,
                        source,
                    })?,
            );
        }

        let mut instance = (constructor.build)(resolved)?;

        for field in &self.meta.fields {
            match field.target {
                FieldTarget::Shared(slot) => {
                    if slot.is_set() {
                        debug!(field = field.name, "Shared field already initialized, skipping");
                        continue;
                    }
                    slot.store(self.resolve_field(provider, field)?)?;
                }
                FieldTarget::Instance(assign) => {
                    assign(&mut *instance, self.resolve_field(provider, field)?)?;
                }
            }
        }

        debug!("Activated `{}`", type_info.short_name());

        Ok(AnyInstance::from(instance))
    }

    fn resolve_field(&self, provider: &dyn DependencyProvider, field: &Field) -> Result<AnyInstance, ActivationErrorKind> {
        provider
            .get_required(field.dependency)
            .map_err(|source| ActivationErrorKind::UnresolvedDependency {
                type_info: self.meta.type_info,
                dependency: field.dependency,
                source,
            })
    }
}
