use crate::info::{Generics, Type, TypePath};
use crate::info::{impl_generic_fn, impl_type_fn};

/// A leaf type whose internals are not described.
///
/// Built-in leaves (numbers, `bool`, `char`, strings, `Duration`,
/// `SystemTime`) have a native wire form. Other opaque types are external:
/// declared somewhere else and described only by name.
///
/// # Examples
///
/// ```
/// use ak_describe::info::Typed;
///
/// assert!(u64::type_info().as_opaque().unwrap().is_builtin());
/// assert!(String::type_info().as_opaque().unwrap().is_builtin());
/// ```
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
    generics: Generics,
    builtin: bool,
}

impl OpaqueInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Create a new external [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            builtin: false,
        }
    }

    /// Create a new built-in [`OpaqueInfo`].
    #[inline]
    pub const fn builtin<T: TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            builtin: true,
        }
    }

    /// Whether the type has a native wire form.
    #[inline]
    pub const fn is_builtin(&self) -> bool {
        self.builtin
    }
}
