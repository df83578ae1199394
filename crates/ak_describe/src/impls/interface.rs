/// Describes `dyn Trait` as an abstract base.
///
/// The listed properties are the ones every implementor shares; each must
/// name a described type. The trait must be in scope, and its type path is
/// the invoking module followed by the trait name.
///
/// Implementors declare the base with `#[describe(implements(dyn Trait))]`
/// or [`TypeRegistry::register_implementor`].
///
/// # Examples
///
/// ```
/// use ak_describe::impl_interface;
/// use ak_describe::info::{TypePath, Typed};
/// use ak_describe::registry::TypeRegistry;
///
/// pub trait Animal {}
///
/// impl_interface!(dyn Animal {
///     name: String,
///     legs: u8,
/// });
///
/// assert!(<dyn Animal>::type_path().ends_with("::Animal"));
/// assert!(<dyn Animal>::type_info().is_abstract());
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<dyn Animal>();
/// assert!(registry.contains(core::any::TypeId::of::<dyn Animal>()));
/// ```
///
/// [`TypeRegistry::register_implementor`]: crate::registry::TypeRegistry::register_implementor
#[macro_export]
macro_rules! impl_interface {
    (dyn $trait:ident) => {
        $crate::impl_interface!(dyn $trait {});
    };
    (dyn $trait:ident { $($prop:ident : $ty:ty),* $(,)? }) => {
        impl $crate::info::TypePath for dyn $trait {
            #[inline]
            fn type_path() -> &'static str {
                ::core::concat!(::core::module_path!(), "::", ::core::stringify!($trait))
            }

            #[inline]
            fn type_name() -> &'static str {
                ::core::stringify!($trait)
            }

            #[inline]
            fn type_ident() -> &'static str {
                ::core::stringify!($trait)
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some(::core::module_path!())
            }
        }

        impl $crate::info::Typed for dyn $trait {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Interface($crate::info::InterfaceInfo::new::<Self>(&[
                        $($crate::info::PropertyInfo::new::<$ty>(::core::stringify!($prop)),)*
                    ]))
                })
            }
        }

        impl $crate::registry::GetTypeMeta for dyn $trait {
            #[allow(unused_variables, reason = "interfaces without properties")]
            fn register_dependencies(registry: &mut $crate::registry::TypeRegistry) {
                $(registry.register::<$ty>();)*
            }
        }
    };
}
