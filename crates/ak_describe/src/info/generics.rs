use alloc::boxed::Box;
use core::ops::Deref;

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};

// -----------------------------------------------------------------------------
// Type Generic Param

/// One instantiated type argument.
///
/// # Examples
///
/// ```
/// use ak_describe::info::Typed;
///
/// let info = <Vec<i32>>::type_info().generics().get("T").unwrap();
/// assert!(info.type_is::<i32>());
/// assert!(info.type_info().as_opaque().unwrap().is_builtin());
/// ```
#[derive(Clone, Debug)]
pub struct TypeParamInfo {
    ty: Type,
    name: &'static str,
    // Resolved on first use; the argument may still be building.
    type_info: fn() -> &'static TypeInfo,
}

impl TypeParamInfo {
    impl_type_fn!(ty);

    /// Create a new [`TypeParamInfo`].
    #[inline]
    pub const fn new<T: Typed + ?Sized>(name: &'static str) -> Self {
        Self {
            ty: Type::of::<T>(),
            name,
            type_info: T::type_info,
        }
    }

    /// Returns the generic parameter name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the description of the argument.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

// -----------------------------------------------------------------------------
// Generics

/// The type arguments of a generic instantiation, in declaration order.
///
/// Empty for non-generic types. Const parameters are part of the type path
/// only and never appear here.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use ak_describe::info::Typed;
///
/// let generics = <BTreeMap<String, u8>>::type_info().generics();
///
/// assert_eq!(generics.len(), 2);
/// assert_eq!(generics[0].name(), "K");
/// assert!(generics[1].type_is::<u8>());
/// ```
#[derive(Clone, Default, Debug)]
pub struct Generics(Option<Box<[TypeParamInfo]>>);

impl Generics {
    /// Create a new, empty `Generics` container.
    #[inline(always)]
    pub const fn new() -> Self {
        Self(None)
    }

    /// Create a `Generics` from `TypeParamInfo`s.
    #[inline]
    pub fn from<const P: usize>(buf: [TypeParamInfo; P]) -> Self {
        if P == 0 {
            return Self(None);
        }
        Self(Some(Box::new(buf)))
    }

    /// Returns the parameter with the given `name`, if present.
    pub fn get(&self, name: &str) -> Option<&TypeParamInfo> {
        self.iter().find(|info| info.name() == name)
    }
}

impl Deref for Generics {
    type Target = [TypeParamInfo];
    #[inline]
    fn deref(&self) -> &Self::Target {
        static EMPTY: [TypeParamInfo; 0] = [];
        match &self.0 {
            Some(v) => v,
            None => &EMPTY,
        }
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `with_generics` and `generics`.
macro_rules! impl_generic_fn {
    ($field:ident) => {
        /// Get generic information.
        ///
        /// See [`Generics`](crate::info::Generics).
        #[inline]
        pub const fn generics(&self) -> &$crate::info::Generics {
            &self.$field
        }

        /// Replace its own generic information.
        #[inline]
        pub fn with_generics(mut self, generics: $crate::info::Generics) -> Self {
            self.$field = generics;
            self
        }
    };
}

pub(super) use impl_generic_fn;
