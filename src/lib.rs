#![no_std]

extern crate alloc;

pub(crate) mod any;
pub(crate) mod classifier;
pub(crate) mod descriptor;
pub(crate) mod errors;
pub(crate) mod factory;
pub(crate) mod inject;
pub(crate) mod marker;
pub(crate) mod provider;
pub(crate) mod registrar;
pub(crate) mod slot;
pub(crate) mod universe;

mod component_macros;

pub mod entries;
pub mod macros_utils;

pub use any::{AnyInstance, TypeInfo};
pub use classifier::{classify, with_kind, with_suffix};
pub use descriptor::{
    build_descriptors, AssignFn, BuildFn, Capability, CastFn, Constructor, Field, FieldTarget, ServiceDescriptor, TypeDescriptor,
};
pub use errors::{ActivationErrorKind, ScanErrorKind};
pub use factory::Factory;
pub use inject::Inject;
pub use marker::{resolve_lifetime, ComponentKind, LifetimeKind};
pub use provider::{DependencyProvider, DescriptorSink};
pub use registrar::Registrar;
pub use slot::{SharedSlot, SlotOps};
pub use universe::{LinkedUniverse, TypeUniverse};
