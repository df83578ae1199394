use crate::derive::impl_type_path;
use crate::impls::GenericTypeInfoCell;
use crate::impls::native::impl_builtin_opaque;
use crate::info::{Generics, OptionInfo, TypeInfo, TypeParamInfo, Typed};
use crate::registry::{GetTypeMeta, TypeRegistry};

impl_type_path!(::core::time::Duration);

impl_builtin_opaque!(::core::time::Duration);

impl_type_path!(::core::option::Option<T>);

impl<T: Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Option(
                OptionInfo::new::<Self, T>()
                    .with_generics(Generics::from([TypeParamInfo::new::<T>("T")])),
            )
        })
    }
}

impl<T: GetTypeMeta> GetTypeMeta for Option<T> {
    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}
