use core::any::TypeId;

use crate::info::{Generics, Type, TypeInfo, TypePath, Typed};
use crate::info::{impl_generic_fn, impl_type_fn};

/// A container for fixed-size arrays `[T; N]`.
///
/// # Examples
///
/// ```rust
/// use ak_describe::info::Typed;
///
/// let info = <[u8; 4] as Typed>::type_info().as_array().unwrap();
///
/// assert_eq!(info.capacity(), 4);
/// assert!(info.item_ty().is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    generics: Generics,
    item_ty: Type,
    item_info: fn() -> &'static TypeInfo,
    capacity: usize,
}

impl ArrayInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Creates a new [`ArrayInfo`].
    #[inline]
    pub const fn new<TArray: TypePath + ?Sized, TItem: Typed>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<TArray>(),
            generics: Generics::new(),
            item_ty: Type::of::<TItem>(),
            item_info: TItem::type_info,
            capacity,
        }
    }

    /// Returns the fixed length of the array.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the [`TypeId`] of array items.
    #[inline]
    pub const fn item_id(&self) -> TypeId {
        self.item_ty.id()
    }

    /// Returns the [`Type`] of array items.
    #[inline]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    /// Returns the [`TypeInfo`] of array items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
