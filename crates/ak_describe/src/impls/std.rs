use ::std::collections::{HashMap, HashSet};
use ::std::time::SystemTime;

use crate::derive::impl_type_path;
use crate::impls::GenericTypeInfoCell;
use crate::impls::native::impl_builtin_opaque;
use crate::info::{Generics, MapInfo, SetInfo, TypeInfo, TypeParamInfo, TypePath, Typed};
use crate::registry::{GetTypeMeta, TypeRegistry};

impl_type_path!(::std::time::SystemTime);

impl_builtin_opaque!(SystemTime);

impl_type_path!(::std::hash::RandomState);
impl_type_path!(::std::collections::HashMap<K, V, S>);
impl_type_path!(::std::collections::HashSet<T, S>);

// -----------------------------------------------------------------------------
// Hash containers, shared with `ak_utils`

macro_rules! impl_describe_for_hash_map {
    ($map:ident) => {
        impl<K: Typed, V: Typed, S: TypePath> Typed for $map<K, V, S> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Map(MapInfo::new::<Self, K, V>().with_generics(Generics::from([
                        TypeParamInfo::new::<K>("K"),
                        TypeParamInfo::new::<V>("V"),
                    ])))
                })
            }
        }

        impl<K: GetTypeMeta, V: GetTypeMeta, S: TypePath> GetTypeMeta for $map<K, V, S> {
            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<K>();
                registry.register::<V>();
            }
        }
    };
}

macro_rules! impl_describe_for_hash_set {
    ($set:ident) => {
        impl<T: Typed, S: TypePath> Typed for $set<T, S> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Set(
                        SetInfo::new::<Self, T>()
                            .with_generics(Generics::from([TypeParamInfo::new::<T>("T")])),
                    )
                })
            }
        }

        impl<T: GetTypeMeta, S: TypePath> GetTypeMeta for $set<T, S> {
            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<T>();
            }
        }
    };
}

pub(super) use {impl_describe_for_hash_map, impl_describe_for_hash_set};

impl_describe_for_hash_map!(HashMap);
impl_describe_for_hash_set!(HashSet);
