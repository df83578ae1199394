use core::fmt;

use crate::info::{Generics, Type, TypeInfo, TypePath, Typed};
use crate::info::{impl_generic_fn, impl_type_fn};

/// The owning pointer behind a [`PointerInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Box,
    Rc,
    Arc,
}

impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box => f.pad("Box"),
            Self::Rc => f.pad("Rc"),
            Self::Arc => f.pad("Arc"),
        }
    }
}

/// A container for owning pointers: `Box<T>`, `Rc<T>` and `Arc<T>`.
///
/// The pointee may be unsized, which is how an abstract base such as
/// `Box<dyn Animal>` reaches a contract.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use ak_describe::info::{PointerKind, Typed};
///
/// let info = <Rc<str> as Typed>::type_info().as_pointer().unwrap();
///
/// assert_eq!(info.pointer_kind(), PointerKind::Rc);
/// assert!(info.pointee_ty().is::<str>());
/// ```
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    generics: Generics,
    pointer_kind: PointerKind,
    pointee_ty: Type,
    pointee_info: fn() -> &'static TypeInfo,
}

impl PointerInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Creates a new [`PointerInfo`].
    #[inline]
    pub const fn new<TPointer: TypePath + ?Sized, TPointee: Typed + ?Sized>(
        pointer_kind: PointerKind,
    ) -> Self {
        Self {
            ty: Type::of::<TPointer>(),
            generics: Generics::new(),
            pointer_kind,
            pointee_ty: Type::of::<TPointee>(),
            pointee_info: TPointee::type_info,
        }
    }

    /// Returns which pointer this is.
    #[inline]
    pub const fn pointer_kind(&self) -> PointerKind {
        self.pointer_kind
    }

    /// Returns the [`Type`] of the pointee.
    #[inline]
    pub const fn pointee_ty(&self) -> &Type {
        &self.pointee_ty
    }

    /// Returns the [`TypeInfo`] of the pointee.
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }
}
