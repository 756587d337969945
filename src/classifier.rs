use alloc::vec::Vec;

use crate::{descriptor::TypeDescriptor, marker::ComponentKind};

/// Filters `types` by `predicate`, preserving input order. Pure, no side effects.
#[must_use]
pub fn classify<'a, P>(types: &'a [TypeDescriptor], predicate: P) -> Vec<&'a TypeDescriptor>
where
    P: Fn(&TypeDescriptor) -> bool,
{
    types.iter().filter(|type_descriptor| predicate(type_descriptor)).collect()
}

/// Predicate matching types whose qualifying name ends with `suffix`.
///
/// Every declared component is a constructible type, so the naming convention needs no
/// separate concreteness check.
#[must_use]
pub fn with_suffix(suffix: &str) -> impl Fn(&TypeDescriptor) -> bool + '_ {
    move |type_descriptor| type_descriptor.type_info.name.ends_with(suffix)
}

/// Predicate matching types declared with `kind`, directly or via specialization.
#[must_use]
pub fn with_kind(kind: ComponentKind) -> impl Fn(&TypeDescriptor) -> bool {
    move |type_descriptor| type_descriptor.has_kind(kind)
}

#[cfg(test)]
mod tests {
    use super::{classify, with_kind, with_suffix};
    use crate::{
        any::TypeInfo,
        descriptor::TypeDescriptor,
        marker::ComponentKind,
    };

    use alloc::{vec, vec::Vec};

    struct BillingService;
    struct InvoiceRepository;
    struct Mailer;

    fn descriptor_of<T: Send + Sync + 'static>(kind: Option<ComponentKind>) -> TypeDescriptor {
        TypeDescriptor {
            type_info: TypeInfo::of::<T>(),
            kind,
            lifetime: None,
            capabilities: Vec::new(),
            constructors: Vec::new(),
            fields: Vec::new(),
            self_cast: |instance| Ok(instance),
        }
    }

    fn universe() -> Vec<TypeDescriptor> {
        vec![
            descriptor_of::<BillingService>(None),
            descriptor_of::<InvoiceRepository>(Some(ComponentKind::Repository)),
            descriptor_of::<Mailer>(Some(ComponentKind::Component)),
        ]
    }

    #[test]
    fn test_suffix_predicate() {
        let types = universe();
        let matched = classify(&types, with_suffix("Service"));

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].type_info, TypeInfo::of::<BillingService>());
    }

    #[test]
    fn test_kind_predicate_specialization() {
        let types = universe();

        let components = classify(&types, with_kind(ComponentKind::Component));
        assert_eq!(components.len(), 2);

        let repositories = classify(&types, with_kind(ComponentKind::Repository));
        assert_eq!(repositories.len(), 1);
        assert_eq!(repositories[0].type_info, TypeInfo::of::<InvoiceRepository>());

        assert!(classify(&types, with_kind(ComponentKind::Service)).is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let types = universe();
        let matched = classify(&types, |_| true);

        let names: Vec<_> = matched.iter().map(|type_descriptor| type_descriptor.type_info.name).collect();
        let expected: Vec<_> = types.iter().map(|type_descriptor| type_descriptor.type_info.name).collect();
        assert_eq!(names, expected);
    }
}
