use crate::info::{Generics, Type, TypeInfo, TypePath, Typed};
use crate::info::{impl_generic_fn, impl_type_fn};

/// A container for set-like types: `BTreeSet<T>` and `HashSet<T>`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use ak_describe::info::Typed;
///
/// let info = <BTreeSet<u16> as Typed>::type_info().as_set().unwrap();
///
/// assert!(info.value_ty().is::<u16>());
/// ```
#[derive(Clone, Debug)]
pub struct SetInfo {
    ty: Type,
    generics: Generics,
    value_ty: Type,
    value_info: fn() -> &'static TypeInfo,
}

impl SetInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Creates a new [`SetInfo`].
    #[inline]
    pub const fn new<TSet: TypePath + ?Sized, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TSet>(),
            generics: Generics::new(),
            value_ty: Type::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    /// Returns the [`Type`] of the elements.
    #[inline]
    pub const fn value_ty(&self) -> &Type {
        &self.value_ty
    }

    /// Returns the [`TypeInfo`] of the elements.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
