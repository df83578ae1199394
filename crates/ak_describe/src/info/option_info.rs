use crate::info::{Generics, Type, TypeInfo, TypePath, Typed};
use crate::info::{impl_generic_fn, impl_type_fn};

/// A container for `Option<T>`, a nullable wrapper around `T`.
///
/// # Examples
///
/// ```rust
/// use ak_describe::info::Typed;
///
/// let info = <Option<String> as Typed>::type_info().as_option().unwrap();
///
/// assert!(info.some_ty().is::<String>());
/// ```
#[derive(Clone, Debug)]
pub struct OptionInfo {
    ty: Type,
    generics: Generics,
    some_ty: Type,
    some_info: fn() -> &'static TypeInfo,
}

impl OptionInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Creates a new [`OptionInfo`].
    #[inline]
    pub const fn new<TOption: TypePath + ?Sized, TSome: Typed>() -> Self {
        Self {
            ty: Type::of::<TOption>(),
            generics: Generics::new(),
            some_ty: Type::of::<TSome>(),
            some_info: TSome::type_info,
        }
    }

    /// Returns the [`Type`] of the wrapped value.
    #[inline]
    pub const fn some_ty(&self) -> &Type {
        &self.some_ty
    }

    /// Returns the [`TypeInfo`] of the wrapped value.
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }
}
