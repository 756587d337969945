use alloc::collections::BTreeSet;
use core::any::TypeId;

use parking_lot::Mutex;
use tracing::debug;

use crate::{
    classifier::{classify, with_kind, with_suffix},
    descriptor::{build_descriptors, TypeDescriptor},
    errors::ScanErrorKind,
    marker::{resolve_lifetime, ComponentKind},
    provider::DescriptorSink,
    universe::TypeUniverse,
};

/// Orchestrates classification and descriptor building across overlapping scan passes,
/// registering each implementation type at most once.
///
/// The registered set lives for the lifetime of the registrar instance and only grows.
/// Startup paths that scan independently must share one registrar to keep the at-most-once
/// guarantee across all of them.
pub struct Registrar {
    registered: Mutex<BTreeSet<TypeId>>,
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new()
    }
}

impl Registrar {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            registered: Mutex::new(BTreeSet::new()),
        }
    }

    /// Registers every not-yet-seen candidate: resolves its lifetime, builds its
    /// descriptors and hands them to `sink`.
    ///
    /// The membership check and the insertion are one atomic step under a lock, so
    /// concurrent startup paths sharing a registrar cannot register a type twice.
    pub fn register<'a, I>(&self, candidates: I, sink: &mut dyn DescriptorSink)
    where
        I: IntoIterator<Item = &'a TypeDescriptor>,
    {
        for candidate in candidates {
            if !self.registered.lock().insert(candidate.type_info.id) {
                debug!("`{}` already registered, skipping", candidate.type_info.short_name());
                continue;
            }

            let lifetime = resolve_lifetime(candidate);
            for descriptor in build_descriptors(candidate, lifetime) {
                sink.add(descriptor);
            }

            debug!(lifetime = lifetime.as_str(), "Registered `{}`", candidate.type_info.short_name());
        }
    }

    /// Registers every type declared with the `Component` marker or one of its
    /// specializations.
    pub fn register_components(&self, universe: &dyn TypeUniverse, sink: &mut dyn DescriptorSink) -> Result<(), ScanErrorKind> {
        let types = universe.types()?;
        self.register(classify(&types, with_kind(ComponentKind::Component)), sink);
        Ok(())
    }

    /// Registers service implementations: first those matching the `"Service"` name
    /// convention, then those declared with the `Service` marker.
    pub fn register_services(&self, universe: &dyn TypeUniverse, sink: &mut dyn DescriptorSink) -> Result<(), ScanErrorKind> {
        let types = universe.types()?;
        self.register(classify(&types, with_suffix("Service")), sink);
        self.register(classify(&types, with_kind(ComponentKind::Service)), sink);
        Ok(())
    }

    /// Registers repository implementations: first those matching the `"Repository"` name
    /// convention, then those declared with the `Repository` marker.
    pub fn register_repositories(&self, universe: &dyn TypeUniverse, sink: &mut dyn DescriptorSink) -> Result<(), ScanErrorKind> {
        let types = universe.types()?;
        self.register(classify(&types, with_suffix("Repository")), sink);
        self.register(classify(&types, with_kind(ComponentKind::Repository)), sink);
        Ok(())
    }

    /// Runs all scan passes in fixed order: components, then services, then repositories.
    ///
    /// A type matched by several passes is registered by the first one that sees it; later
    /// passes skip it through the registered set.
    pub fn auto_register(&self, universe: &dyn TypeUniverse, sink: &mut dyn DescriptorSink) -> Result<(), ScanErrorKind> {
        self.register_components(universe, sink)?;
        self.register_services(universe, sink)?;
        self.register_repositories(universe, sink)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::Registrar;
    use crate::{
        any::TypeInfo,
        descriptor::{ServiceDescriptor, TypeDescriptor},
        marker::{ComponentKind, LifetimeKind},
        provider::DescriptorSink,
        universe::TypeUniverse,
    };

    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::{vec, vec::Vec};
    use core::any::TypeId;
    use tracing_test::traced_test;

    struct PricingService;
    struct PriceRepository;
    struct Mailer;

    fn descriptor_of<T: Send + Sync + 'static>(kind: Option<ComponentKind>, lifetime: Option<LifetimeKind>) -> TypeDescriptor {
        TypeDescriptor {
            type_info: TypeInfo::of::<T>(),
            kind,
            lifetime,
            capabilities: Vec::new(),
            constructors: Vec::new(),
            fields: Vec::new(),
            self_cast: |instance| Ok(instance),
        }
    }

    #[derive(Default)]
    struct CollectSink {
        descriptors: Vec<ServiceDescriptor>,
    }

    impl DescriptorSink for CollectSink {
        fn add(&mut self, descriptor: ServiceDescriptor) {
            self.descriptors.push(descriptor);
        }
    }

    struct FailingUniverse;

    impl TypeUniverse for FailingUniverse {
        fn types(&self) -> Result<Vec<TypeDescriptor>, anyhow::Error> {
            Err(anyhow::anyhow!("code unit cannot be enumerated"))
        }
    }

    #[test]
    #[traced_test]
    fn test_overlapping_passes_register_once() {
        // Matched by the suffix convention and by the marker pass.
        let universe = vec![descriptor_of::<PricingService>(Some(ComponentKind::Service), None)];
        let registrar = Registrar::new();
        let mut sink = CollectSink::default();

        registrar.register_services(&universe, &mut sink).unwrap();

        assert_eq!(sink.descriptors.len(), 1);
        assert_eq!(sink.descriptors[0].service.id, TypeId::of::<PricingService>());
        assert!(logs_contain("already registered"));
    }

    #[test]
    fn test_auto_register_end_state() {
        let universe = vec![
            descriptor_of::<PricingService>(Some(ComponentKind::Service), None),
            descriptor_of::<PriceRepository>(Some(ComponentKind::Repository), Some(LifetimeKind::Scoped)),
            descriptor_of::<Mailer>(Some(ComponentKind::Component), Some(LifetimeKind::Transient)),
        ];
        let registrar = Registrar::new();
        let mut sink = CollectSink::default();

        registrar.auto_register(&universe, &mut sink).unwrap();

        assert_eq!(sink.descriptors.len(), 3);

        let lifetime_of = |id: TypeId| {
            sink.descriptors
                .iter()
                .find(|descriptor| descriptor.service.id == id)
                .map(|descriptor| descriptor.lifetime)
                .unwrap()
        };
        assert_eq!(lifetime_of(TypeId::of::<PricingService>()), LifetimeKind::Singleton);
        assert_eq!(lifetime_of(TypeId::of::<PriceRepository>()), LifetimeKind::Scoped);
        assert_eq!(lifetime_of(TypeId::of::<Mailer>()), LifetimeKind::Transient);
    }

    #[test]
    fn test_repeated_scan_adds_nothing() {
        let universe = vec![descriptor_of::<Mailer>(Some(ComponentKind::Component), None)];
        let registrar = Registrar::new();
        let mut sink = CollectSink::default();

        registrar.auto_register(&universe, &mut sink).unwrap();
        let registered = sink.descriptors.len();
        registrar.auto_register(&universe, &mut sink).unwrap();

        assert_eq!(sink.descriptors.len(), registered);
    }

    #[test]
    fn test_unmarked_type_is_ignored_by_marker_passes() {
        let universe = vec![descriptor_of::<Mailer>(None, None)];
        let registrar = Registrar::new();
        let mut sink = CollectSink::default();

        registrar.auto_register(&universe, &mut sink).unwrap();

        assert!(sink.descriptors.is_empty());
    }

    #[test]
    fn test_failed_enumeration_adds_no_descriptors() {
        let registrar = Registrar::new();
        let mut sink = CollectSink::default();

        registrar.register_components(&FailingUniverse, &mut sink).unwrap_err();

        assert!(sink.descriptors.is_empty());
    }
}
