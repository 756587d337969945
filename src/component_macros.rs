/// Declares an implementation type as an injectable component.
///
/// The declaration is the type's wiring record: its markers, the capabilities it is
/// resolvable under, its public constructor table and its marked injection fields. The
/// expansion builds a [`TypeDescriptor`](crate::TypeDescriptor) getter and plants it in the
/// link-time universe read by [`LinkedUniverse`](crate::LinkedUniverse), so a scan finds the
/// type without any per-type registration call.
///
/// Sections appear in fixed order and every section is optional; each present section ends
/// with a comma:
///
/// - `kind:` — `Component`, `Service` or `Repository`.
/// - `lifetime:` — `Singleton`, `Scoped` or `Transient`; omit to default at scan time.
/// - `capabilities:` — identities the type is resolvable under, usually
///   `dyn Trait + Send + Sync`.
/// - `constructors:` — constructor names with their parameter identities; the named
///   associated functions must take [`Inject`](crate::Inject) parameters in the same order.
/// - `fields:` — per-instance injection fields, typed `Option<Arc<T>>` on the struct and
///   left `None` by the constructor; wiring fills them after construction.
/// - `shared:` — process-wide [`SharedSlot`](crate::SharedSlot) statics, initialized by the
///   first activation only.
///
/// The macro must be invoked in the module that defines the type, at module level.
///
/// # Examples
/// ```rust
/// use autoreg::{component, DescriptorSink, LinkedUniverse, Registrar, ServiceDescriptor};
///
/// trait PingApi: Send + Sync {
///     fn ping(&self) -> &'static str;
/// }
///
/// struct PingService;
///
/// impl PingApi for PingService {
///     fn ping(&self) -> &'static str {
///         "pong"
///     }
/// }
///
/// impl PingService {
///     fn new() -> Self {
///         Self
///     }
/// }
///
/// component! {
///     PingService {
///         kind: Service,
///         capabilities: [dyn PingApi + Send + Sync],
///         constructors: [new()],
///     }
/// }
///
/// struct Sink(Vec<ServiceDescriptor>);
///
/// impl DescriptorSink for Sink {
///     fn add(&mut self, descriptor: ServiceDescriptor) {
///         self.0.push(descriptor);
///     }
/// }
///
/// let mut sink = Sink(Vec::new());
/// Registrar::new().auto_register(&LinkedUniverse, &mut sink).unwrap();
/// assert_eq!(sink.0.len(), 2);
/// ```
#[macro_export]
macro_rules! component {
    (
        $ty:ident {
            $( kind: $kind:ident, )?
            $( lifetime: $lifetime:ident, )?
            $( capabilities: [ $( $cap:ty ),* $(,)? ], )?
            $( constructors: [ $( $ctor:ident ( $( $param:ty ),* $(,)? ) ),* $(,)? ], )?
            $( fields: { $( $field:ident : $fty:ty ),* $(,)? }, )?
            $( shared: { $( $slot:ident : $sty:ty ),* $(,)? }, )?
        }
    ) => {
        const _: () = {
            fn type_descriptor() -> $crate::TypeDescriptor {
                #[allow(unused_mut)]
                let mut capabilities: $crate::macros_utils::Vec<$crate::Capability> = $crate::macros_utils::Vec::new();
                $( $(
                    capabilities.push($crate::Capability {
                        type_info: $crate::TypeInfo::of::<$cap>(),
                        cast: {
                            fn cast(
                                instance: $crate::AnyInstance,
                            ) -> ::core::result::Result<$crate::AnyInstance, $crate::ActivationErrorKind> {
                                let actual = ::core::any::Any::type_id(&*instance);
                                let concrete = match instance.downcast::<$ty>() {
                                    Ok(concrete) => concrete,
                                    Err(_) => {
                                        return Err($crate::ActivationErrorKind::IncorrectType {
                                            expected: ::core::any::TypeId::of::<$ty>(),
                                            actual,
                                        })
                                    }
                                };
                                let capability: $crate::macros_utils::Arc<$cap> = concrete;
                                let instance: $crate::AnyInstance = $crate::macros_utils::Arc::new(capability);
                                Ok(instance)
                            }
                            cast
                        },
                    });
                )* )?

                #[allow(unused_mut)]
                let mut constructors: $crate::macros_utils::Vec<$crate::Constructor> = $crate::macros_utils::Vec::new();
                $( $(
                    constructors.push($crate::Constructor {
                        params: {
                            #[allow(unused_mut)]
                            let mut params: $crate::macros_utils::Vec<$crate::TypeInfo> = $crate::macros_utils::Vec::new();
                            $( params.push($crate::TypeInfo::of::<$param>()); )*
                            params
                        },
                        build: {
                            #[allow(unused_mut, unused_variables)]
                            fn build(
                                deps: $crate::macros_utils::Vec<$crate::AnyInstance>,
                            ) -> ::core::result::Result<$crate::macros_utils::BoxedAny, $crate::ActivationErrorKind> {
                                let mut deps = deps.into_iter();
                                let instance = <$ty>::$ctor(
                                    $( $crate::Inject::<$param>::from_any(
                                        deps.next().expect("parameter count checked by the factory"),
                                    )?, )*
                                );
                                Ok($crate::macros_utils::Box::new(instance))
                            }
                            build
                        },
                    });
                )* )?

                #[allow(unused_mut)]
                let mut fields: $crate::macros_utils::Vec<$crate::Field> = $crate::macros_utils::Vec::new();
                $( $(
                    fields.push($crate::Field {
                        name: ::core::stringify!($field),
                        dependency: $crate::TypeInfo::of::<$fty>(),
                        target: $crate::FieldTarget::Instance({
                            fn assign(
                                instance: &mut (dyn ::core::any::Any + ::core::marker::Send + ::core::marker::Sync),
                                value: $crate::AnyInstance,
                            ) -> ::core::result::Result<(), $crate::ActivationErrorKind> {
                                let actual = ::core::any::Any::type_id(&*instance);
                                let target = match instance.downcast_mut::<$ty>() {
                                    Some(target) => target,
                                    None => {
                                        return Err($crate::ActivationErrorKind::IncorrectType {
                                            expected: ::core::any::TypeId::of::<$ty>(),
                                            actual,
                                        })
                                    }
                                };
                                target.$field = ::core::option::Option::Some($crate::Inject::<$fty>::from_any(value)?.0);
                                Ok(())
                            }
                            assign
                        }),
                    });
                )* )?
                $( $(
                    fields.push($crate::Field {
                        name: ::core::stringify!($slot),
                        dependency: $crate::TypeInfo::of::<$sty>(),
                        target: $crate::FieldTarget::Shared(&$slot),
                    });
                )* )?

                $crate::TypeDescriptor {
                    type_info: $crate::TypeInfo::of::<$ty>(),
                    kind: ::core::option::Option::None $( .or(::core::option::Option::Some($crate::ComponentKind::$kind)) )?,
                    lifetime: ::core::option::Option::None $( .or(::core::option::Option::Some($crate::LifetimeKind::$lifetime)) )?,
                    capabilities,
                    constructors,
                    fields,
                    self_cast: {
                        fn cast(
                            instance: $crate::AnyInstance,
                        ) -> ::core::result::Result<$crate::AnyInstance, $crate::ActivationErrorKind> {
                            let actual = ::core::any::Any::type_id(&*instance);
                            match instance.downcast::<$ty>() {
                                Ok(concrete) => {
                                    let instance: $crate::AnyInstance = $crate::macros_utils::Arc::new(concrete);
                                    Ok(instance)
                                }
                                Err(_) => Err($crate::ActivationErrorKind::IncorrectType {
                                    expected: ::core::any::TypeId::of::<$ty>(),
                                    actual,
                                }),
                            }
                        }
                        cast
                    },
                }
            }

            #[$crate::entries::distributed_slice($crate::entries::__TYPE_GETTERS)]
            #[linkme(crate = $crate::entries::linkme)]
            static TYPE_GETTER: fn() -> $crate::TypeDescriptor = type_descriptor;
        };
    };
}
