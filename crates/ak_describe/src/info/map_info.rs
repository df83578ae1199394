use crate::info::{Generics, Type, TypeInfo, TypePath, Typed};
use crate::info::{impl_generic_fn, impl_type_fn};

/// A container for map-like types: `BTreeMap<K, V>` and `HashMap<K, V>`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use ak_describe::info::Typed;
///
/// let info = <HashMap<String, u32> as Typed>::type_info().as_map().unwrap();
///
/// assert!(info.key_ty().is::<String>());
/// assert!(info.value_ty().is::<u32>());
/// ```
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    generics: Generics,
    key_ty: Type,
    key_info: fn() -> &'static TypeInfo,
    value_ty: Type,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Creates a new [`MapInfo`].
    #[inline]
    pub const fn new<TMap: TypePath + ?Sized, TKey: Typed, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            generics: Generics::new(),
            key_ty: Type::of::<TKey>(),
            key_info: TKey::type_info,
            value_ty: Type::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    /// Returns the [`Type`] of the keys.
    #[inline]
    pub const fn key_ty(&self) -> &Type {
        &self.key_ty
    }

    /// Returns the [`TypeInfo`] of the keys.
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    /// Returns the [`Type`] of the values.
    #[inline]
    pub const fn value_ty(&self) -> &Type {
        &self.value_ty
    }

    /// Returns the [`TypeInfo`] of the values.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
