use crate::{
    any::{AnyInstance, TypeInfo},
    descriptor::ServiceDescriptor,
};

/// Resolution side of the external container, consumed at activation time.
pub trait DependencyProvider {
    /// Returns an instance stored under `dependency`, failing if it cannot be supplied.
    ///
    /// The payload of the returned instance must be `Arc<T>` for the requested identity `T`
    /// (see [`AnyInstance`]). Errors are propagated unchanged to the activation caller.
    fn get_required(&self, dependency: TypeInfo) -> Result<AnyInstance, anyhow::Error>;
}

/// Registration side of the external container: accumulates descriptors during a scan.
pub trait DescriptorSink {
    fn add(&mut self, descriptor: ServiceDescriptor);
}
