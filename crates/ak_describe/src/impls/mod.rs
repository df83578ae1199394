//! Descriptions of std types, plus utilities for describing types by hand.
//!
//! - [`concat`]: an efficient string concatenation function.
//! - [`NonGenericTypeInfoCell`]: used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: used to implement [`Typed`] for generic types.
//!
//! ## Implemented Menu
//!
//! - built-in opaque:
//!     - `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `str`, `String`
//!     - `core::time::Duration`, `std::time::SystemTime`
//! - list: `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, `[T]`
//! - array: `[T; N]`
//! - map: `BTreeMap<K, V>`, `std::collections::HashMap<K, V, S>`, `ak_utils::hash::HashMap<K, V, S>`
//! - set: `BTreeSet<T>`, `std::collections::HashSet<T, S>`, `ak_utils::hash::HashSet<T, S>`
//! - nullable: `Option<T>`
//! - pointer: `Box<T>`, `Rc<T>`, `Arc<T>`, `T: ?Sized`
//!
//! Hash states (`RandomState`, `FixedHashState`, `NoOpHashState`) only carry
//! a [`TypePath`], they never appear as a property type.
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod interface;

mod ak_utils;
mod alloc;
mod core;
mod native;
mod std;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use ak_describe::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s, "module::name<T>");
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use ::alloc::boxed::Box;
    use ::alloc::collections::{BTreeMap, LinkedList};
    use ::alloc::string::String;
    use ::alloc::sync::Arc;
    use ::alloc::vec::Vec;
    use ::core::time::Duration;
    use ::std::collections::HashMap;
    use ::std::time::SystemTime;

    use crate::info::{DescribeKind, PointerKind, TypePath, Typed};

    #[test]
    fn builtin_leaves() {
        for info in [
            bool::type_info(),
            char::type_info(),
            u128::type_info(),
            f64::type_info(),
            str::type_info(),
            String::type_info(),
            Duration::type_info(),
            SystemTime::type_info(),
        ] {
            assert!(info.as_opaque().unwrap().is_builtin(), "{}", info.type_path());
        }
        assert_eq!(Duration::type_path(), "core::time::Duration");
        assert_eq!(SystemTime::type_path(), "std::time::SystemTime");
    }

    #[test]
    fn builtin_leaves_outside_native_register() {
        let mut registry = crate::registry::TypeRegistry::empty();
        registry.register::<String>();
        registry.register::<Duration>();
        registry.register::<SystemTime>();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains(::core::any::TypeId::of::<Duration>()));
        assert!(::core::ptr::eq(
            registry.get_type_info(::core::any::TypeId::of::<SystemTime>()).unwrap(),
            SystemTime::type_info()
        ));
    }

    #[test]
    fn nested_generic_paths() {
        assert_eq!(
            <Option<Vec<usize>>>::type_path(),
            "core::option::Option<alloc::vec::Vec<usize>>"
        );
        assert_eq!(<Option<Vec<usize>>>::type_name(), "Option<Vec<usize>>");
        assert_eq!(<Option<Vec<usize>>>::type_ident(), "Option");
        assert_eq!(<[u8; 3]>::type_path(), "[u8; 3]");
        assert_eq!(<[String]>::type_name(), "[String]");
    }

    #[test]
    fn nested_instantiations_share_a_cell() {
        let outer = <Vec<Vec<u8>>>::type_info().as_list().unwrap();
        let inner = outer.item_info().as_list().unwrap();
        assert!(inner.item_is::<u8>());
        assert!(::core::ptr::eq(inner, <Vec<u8>>::type_info().as_list().unwrap()));
    }

    #[test]
    fn container_kinds() {
        assert_eq!(<LinkedList<u8>>::type_info().kind(), DescribeKind::List);
        assert_eq!(<[u8]>::type_info().kind(), DescribeKind::List);
        assert_eq!(<BTreeMap<u8, u8>>::type_info().kind(), DescribeKind::Map);
        assert_eq!(<HashMap<u8, u8>>::type_info().kind(), DescribeKind::Map);
        assert_eq!(<Option<u8>>::type_info().kind(), DescribeKind::Option);

        let boxed = <Box<str>>::type_info().as_pointer().unwrap();
        assert_eq!(boxed.pointer_kind(), PointerKind::Box);
        let shared = <Arc<[u8]>>::type_info().as_pointer().unwrap();
        assert_eq!(shared.pointer_kind(), PointerKind::Arc);
        assert_eq!(shared.pointee_info().kind(), DescribeKind::List);
    }

    #[test]
    fn std_hash_map_path_names_its_state() {
        assert_eq!(
            <HashMap<u8, bool>>::type_path(),
            "std::collections::HashMap<u8, bool, std::hash::RandomState>"
        );
        let generics = <HashMap<u8, bool>>::type_info().generics();
        assert_eq!(generics.len(), 2);
        assert_eq!(generics[1].name(), "V");
    }
}
