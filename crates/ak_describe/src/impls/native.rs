use ::alloc::string::ToString;

use crate::derive::impl_type_path;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{ArrayInfo, Generics, ListInfo, TypeInfo, TypeParamInfo};
use crate::info::{TypePath, Typed};
use crate::registry::{GetTypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// Built-in leaves

/// Implements `Typed` and `GetTypeMeta` for types with a native wire form.
///
/// The type must already implement `TypePath`.
macro_rules! impl_builtin_opaque {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::builtin::<Self>())
                })
            }
        }

        impl $crate::registry::GetTypeMeta for $ty {}
    )*};
}

pub(super) use impl_builtin_opaque;

impl_type_path!(bool);
impl_type_path!(char);
impl_type_path!(u8);
impl_type_path!(u16);
impl_type_path!(u32);
impl_type_path!(u64);
impl_type_path!(u128);
impl_type_path!(usize);
impl_type_path!(i8);
impl_type_path!(i16);
impl_type_path!(i32);
impl_type_path!(i64);
impl_type_path!(i128);
impl_type_path!(isize);
impl_type_path!(f32);
impl_type_path!(f64);
impl_type_path!(str);

impl_builtin_opaque!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, str,
);

// -----------------------------------------------------------------------------
// Slices

impl<T: TypePath> TypePath for [T] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| crate::impls::concat(&["[", T::type_path(), "]"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| crate::impls::concat(&["[", T::type_name(), "]"]))
    }

    fn type_ident() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| crate::impls::concat(&["[", T::type_ident(), "]"]))
    }
}

impl<T: Typed> Typed for [T] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::List(
                ListInfo::new::<Self, T>()
                    .with_generics(Generics::from([TypeParamInfo::new::<T>("T")])),
            )
        })
    }
}

impl<T: GetTypeMeta> GetTypeMeta for [T] {
    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

// -----------------------------------------------------------------------------
// Arrays

impl<T: TypePath, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_path(), "; ", &N.to_string(), "]"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_name(), "; ", &N.to_string(), "]"])
        })
    }

    fn type_ident() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_ident(), "; ", &N.to_string(), "]"])
        })
    }
}

impl<T: Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Array(
                ArrayInfo::new::<Self, T>(N)
                    .with_generics(Generics::from([TypeParamInfo::new::<T>("T")])),
            )
        })
    }
}

impl<T: GetTypeMeta, const N: usize> GetTypeMeta for [T; N] {
    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}
