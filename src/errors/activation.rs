use core::any::TypeId;

use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ActivationErrorKind {
    #[error("Expected exactly one public constructor on `{}`, found {found}", type_info.name)]
    AmbiguousConstructor { type_info: TypeInfo, found: usize },
    #[error("Unresolved dependency `{}` required by `{}`", dependency.name, type_info.name)]
    UnresolvedDependency {
        type_info: TypeInfo,
        dependency: TypeInfo,
        #[source]
        source: anyhow::Error,
    },
    #[error("Incorrect instance type. Actual: {actual:?}, expected: {expected:?}")]
    IncorrectType { expected: TypeId, actual: TypeId },
}
