use alloc::boxed::Box;

use crate::info::{Generics, PropertyInfo, Type, TypePath};
use crate::info::{impl_generic_fn, impl_type_fn};

/// An abstract base, a `dyn Trait`.
///
/// Values of an interface type are always one of its registered
/// implementors. The properties are the ones every implementor shares.
///
/// Usually created by [`impl_interface!`](crate::impl_interface).
///
/// # Examples
///
/// ```
/// use ak_describe::impl_interface;
/// use ak_describe::info::Typed;
///
/// pub trait Shape {}
///
/// impl_interface!(dyn Shape { area: f64 });
///
/// let info = <dyn Shape>::type_info().as_interface().unwrap();
/// assert_eq!(info.type_ident(), "Shape");
/// assert_eq!(info.properties()[0].name(), "area");
/// ```
#[derive(Clone, Debug)]
pub struct InterfaceInfo {
    ty: Type,
    generics: Generics,
    properties: Box<[PropertyInfo]>,
}

impl InterfaceInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Create a new [`InterfaceInfo`].
    pub fn new<T: TypePath + ?Sized>(properties: &[PropertyInfo]) -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            properties: properties.into(),
        }
    }

    /// Returns the property with the given `name`, if present.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Returns the properties in declaration order.
    #[inline]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }
}
