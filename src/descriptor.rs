use alloc::{boxed::Box, vec::Vec};
use core::any::Any;

use crate::{
    any::{AnyInstance, TypeInfo},
    errors::ActivationErrorKind,
    factory::Factory,
    marker::{ComponentKind, LifetimeKind},
    provider::DependencyProvider,
    slot::SlotOps,
};

/// Converts a factory-produced instance into the payload stored under one service identity.
pub type CastFn = fn(AnyInstance) -> Result<AnyInstance, ActivationErrorKind>;

/// Assigns a resolved dependency onto a marked field of a freshly constructed instance.
pub type AssignFn = fn(&mut (dyn Any + Send + Sync), AnyInstance) -> Result<(), ActivationErrorKind>;

/// Constructs an instance from parameters resolved in declared order.
pub type BuildFn = fn(Vec<AnyInstance>) -> Result<Box<dyn Any + Send + Sync>, ActivationErrorKind>;

/// Wiring record for one implementation type: markers, capability casts, constructor table
/// and marked fields, declared through [`component!`](crate::component).
#[derive(Clone)]
pub struct TypeDescriptor {
    pub type_info: TypeInfo,
    pub kind: Option<ComponentKind>,
    pub lifetime: Option<LifetimeKind>,
    pub capabilities: Vec<Capability>,
    pub constructors: Vec<Constructor>,
    pub fields: Vec<Field>,
    pub self_cast: CastFn,
}

impl TypeDescriptor {
    /// Returns `true` if the type declares `requested`, directly or via specialization.
    #[inline]
    #[must_use]
    pub fn has_kind(&self, requested: ComponentKind) -> bool {
        self.kind.is_some_and(|kind| kind.is(requested))
    }
}

/// One declared capability: the abstract identity the implementation is resolvable under.
#[derive(Clone, Copy)]
pub struct Capability {
    pub type_info: TypeInfo,
    pub cast: CastFn,
}

/// One public constructor of the implementation type.
#[derive(Clone)]
pub struct Constructor {
    pub params: Vec<TypeInfo>,
    pub build: BuildFn,
}

/// One field marked as a required injection point.
#[derive(Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub dependency: TypeInfo,
    pub target: FieldTarget,
}

#[derive(Clone, Copy)]
pub enum FieldTarget {
    /// Per-instance field, assigned on every activation.
    Instance(AssignFn),
    /// Process-wide slot shared across all instances, initialized at most once.
    Shared(&'static dyn SlotOps),
}

/// Registration entry binding one service identity to an implementation type, a lifetime
/// and a construction strategy.
#[derive(Clone)]
pub struct ServiceDescriptor {
    pub service: TypeInfo,
    pub implementation: TypeInfo,
    pub lifetime: LifetimeKind,
    pub factory: Factory,
    pub(crate) cast: CastFn,
}

impl ServiceDescriptor {
    /// Activates the implementation through `provider` and casts the instance to the
    /// service identity this descriptor was registered under.
    pub fn activate(&self, provider: &dyn DependencyProvider) -> Result<AnyInstance, ActivationErrorKind> {
        (self.cast)(self.factory.activate(provider)?)
    }
}

/// Builds the descriptors of one implementation type: one per declared capability, plus one
/// for the concrete identity so the type stays resolvable by itself. All descriptors share
/// one [`Factory`].
#[must_use]
pub fn build_descriptors(implementation: &TypeDescriptor, lifetime: LifetimeKind) -> Vec<ServiceDescriptor> {
    let factory = Factory::new(implementation.clone());

    let mut descriptors = Vec::with_capacity(implementation.capabilities.len() + 1);
    for capability in &implementation.capabilities {
        descriptors.push(ServiceDescriptor {
            service: capability.type_info,
            implementation: implementation.type_info,
            lifetime,
            factory: factory.clone(),
            cast: capability.cast,
        });
    }
    descriptors.push(ServiceDescriptor {
        service: implementation.type_info,
        implementation: implementation.type_info,
        lifetime,
        factory,
        cast: implementation.self_cast,
    });

    descriptors
}
