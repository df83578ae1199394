use ::alloc::boxed::Box;
use ::alloc::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};
use ::alloc::rc::Rc;
use ::alloc::string::String;
use ::alloc::sync::Arc;
use ::alloc::vec::Vec;

use crate::derive::impl_type_path;
use crate::impls::GenericTypeInfoCell;
use crate::impls::native::impl_builtin_opaque;
use crate::info::{Generics, ListInfo, MapInfo, PointerInfo, PointerKind, SetInfo};
use crate::info::{TypeInfo, TypeParamInfo, Typed};
use crate::registry::{GetTypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// String

impl_type_path!(::alloc::string::String);

impl_builtin_opaque!(String);

// -----------------------------------------------------------------------------
// Lists

impl_type_path!(::alloc::vec::Vec<T>);
impl_type_path!(::alloc::collections::VecDeque<T>);
impl_type_path!(::alloc::collections::LinkedList<T>);

macro_rules! impl_describe_for_list {
    ($($list:ident),*) => {$(
        impl<T: Typed> Typed for $list<T> {
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

        impl<T: GetTypeMeta> GetTypeMeta for $list<T> {
            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<T>();
            }
        }
    )*};
}

impl_describe_for_list!(Vec, VecDeque, LinkedList);

// -----------------------------------------------------------------------------
// Ordered map and set

impl_type_path!(::alloc::collections::BTreeMap<K, V>);
impl_type_path!(::alloc::collections::BTreeSet<T>);

impl<K: Typed, V: Typed> Typed for BTreeMap<K, V> {
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

impl<K: GetTypeMeta, V: GetTypeMeta> GetTypeMeta for BTreeMap<K, V> {
    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<K>();
        registry.register::<V>();
    }
}

impl<T: Typed> Typed for BTreeSet<T> {
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

impl<T: GetTypeMeta> GetTypeMeta for BTreeSet<T> {
    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

// -----------------------------------------------------------------------------
// Owning pointers

impl_type_path!(::alloc::boxed::Box<T: ?Sized>);
impl_type_path!(::alloc::rc::Rc<T: ?Sized>);
impl_type_path!(::alloc::sync::Arc<T: ?Sized>);

macro_rules! impl_describe_for_pointer {
    ($($ptr:ident),*) => {$(
        impl<T: Typed + ?Sized> Typed for $ptr<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Pointer(
                        PointerInfo::new::<Self, T>(PointerKind::$ptr)
                            .with_generics(Generics::from([TypeParamInfo::new::<T>("T")])),
                    )
                })
            }
        }

        impl<T: GetTypeMeta + ?Sized> GetTypeMeta for $ptr<T> {
            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<T>();
            }
        }
    )*};
}

impl_describe_for_pointer!(Box, Rc, Arc);
