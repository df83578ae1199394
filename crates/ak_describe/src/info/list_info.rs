use core::any::{Any, TypeId};

use crate::info::{Generics, Type, TypeInfo, TypePath, Typed};
use crate::info::{impl_generic_fn, impl_type_fn};

/// A container for list-like types: `Vec<T>`, `VecDeque<T>`,
/// `LinkedList<T>` and `[T]`.
///
/// # Examples
///
/// ```rust
/// # use core::any::TypeId;
/// use ak_describe::info::Typed;
///
/// let info = <Vec<i32> as Typed>::type_info().as_list().unwrap();
///
/// assert_eq!(info.item_id(), TypeId::of::<i32>());
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    generics: Generics,
    item_ty: Type,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Creates a new [`ListInfo`].
    #[inline]
    pub const fn new<TList: TypePath + ?Sized, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            generics: Generics::new(),
            item_ty: Type::of::<TItem>(),
            item_info: TItem::type_info,
        }
    }

    /// Returns the [`TypeId`] of list items.
    #[inline]
    pub const fn item_id(&self) -> TypeId {
        self.item_ty.id()
    }

    /// Returns the [`Type`] of list items.
    #[inline]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    /// Returns `true` if the item type is `T`.
    #[inline]
    pub fn item_is<T: Any>(&self) -> bool {
        self.item_ty.is::<T>()
    }

    /// Returns the [`TypeInfo`] of list items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
