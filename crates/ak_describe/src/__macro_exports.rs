//! Items referenced by generated code. Not a public API.

pub mod macro_utils {
    pub use crate::impls::concat as __concat;
    pub use alloc::borrow::ToOwned;
    pub use alloc::string::ToString;
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
    use crate::registry::{GetTypeMeta, TypeRegistry};

    /// A registration function submitted by `#[describe(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: GetTypeMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Registered through `inventory` like any marked type. If it is
    /// missing after collection, the platform does not support it.
    pub struct __AvailFlag;

    impl TypePath for __AvailFlag {
        fn type_path() -> &'static str {
            "ak_describe::__macro_exports::auto_register::__AvailFlag"
        }
        fn type_name() -> &'static str {
            "__AvailFlag"
        }
        fn type_ident() -> &'static str {
            "__AvailFlag"
        }
        fn module_path() -> Option<&'static str> {
            Some("ak_describe::__macro_exports::auto_register")
        }
    }

    impl Typed for __AvailFlag {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
        }
    }

    impl GetTypeMeta for __AvailFlag {}

    inventory::submit! {
        __AutoRegisterFunc(<__AvailFlag as __RegisterType>::__register)
    }

    pub fn __register_types(registry: &mut TypeRegistry) {
        let mut count = 0usize;
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
            count += 1;
        }
        log::debug!("auto_register ran {count} registration functions");
    }
}

#[cfg(all(test, feature = "auto_register"))]
mod tests {
    use core::any::TypeId;

    use crate::derive::Describe;
    use crate::registry::TypeRegistry;

    #[derive(Describe)]
    #[describe(auto_register)]
    pub struct Beacon {
        pub signal: u16,
    }

    #[test]
    fn collects_marked_types() {
        let mut registry = TypeRegistry::empty();
        if registry.auto_register() {
            assert!(registry.contains(TypeId::of::<Beacon>()));
            assert!(registry.contains(TypeId::of::<u16>()));
            assert!(registry.auto_register());
        }
    }
}
