//! Helpers referenced by the expansion of [`component!`](crate::component); not public API.

use core::any::Any;

pub use alloc::{boxed::Box, sync::Arc, vec::Vec};

/// Boxed type-erased instance, as produced by generated constructor shims.
pub type BoxedAny = Box<dyn Any + Send + Sync>;
