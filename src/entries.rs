use crate::descriptor::TypeDescriptor;

pub use linkme::{self, distributed_slice};

/// Entry getters planted by [`component!`](crate::component) declarations, one per declared
/// type, collected at link time across every crate in the program.
#[distributed_slice]
pub static __TYPE_GETTERS: [fn() -> TypeDescriptor];
