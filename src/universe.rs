use alloc::vec::Vec;

use crate::{descriptor::TypeDescriptor, entries::__TYPE_GETTERS};

/// Source of candidate types for a scan: one code unit of the running program.
pub trait TypeUniverse {
    /// Enumerates the contained types.
    ///
    /// Failures propagate unchanged to the scan caller; a failed enumeration contributes
    /// no types, so the scan adds no descriptors at all.
    fn types(&self) -> Result<Vec<TypeDescriptor>, anyhow::Error>;
}

/// The whole-program universe: every type declared through
/// [`component!`](crate::component), collected at link time.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkedUniverse;

impl TypeUniverse for LinkedUniverse {
    fn types(&self) -> Result<Vec<TypeDescriptor>, anyhow::Error> {
        Ok(__TYPE_GETTERS.iter().map(|getter| getter()).collect())
    }
}

impl TypeUniverse for [TypeDescriptor] {
    fn types(&self) -> Result<Vec<TypeDescriptor>, anyhow::Error> {
        Ok(self.to_vec())
    }
}

impl TypeUniverse for Vec<TypeDescriptor> {
    fn types(&self) -> Result<Vec<TypeDescriptor>, anyhow::Error> {
        Ok(self.clone())
    }
}
