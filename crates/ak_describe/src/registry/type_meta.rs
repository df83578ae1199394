use alloc::vec::Vec;

use crate::info::{Generics, Type, TypeInfo, Typed};
use crate::registry::TypeRegistry;

// -----------------------------------------------------------------------------
// TypeMeta

/// Registry entry for one type.
///
/// Holds the static [`TypeInfo`] and the abstract bases (`dyn Trait`) the
/// type declares it implements.
///
/// # Examples
///
/// ```
/// use ak_describe::info::Type;
/// use ak_describe::registry::TypeMeta;
///
/// trait Named {}
/// ak_describe::impl_interface!(dyn Named);
///
/// let mut meta = TypeMeta::of::<String>();
/// meta.insert_base(Type::of::<dyn Named>());
///
/// assert!(meta.implements_base(&Type::of::<dyn Named>()));
/// assert_eq!(meta.type_path(), "alloc::string::String");
/// ```
#[derive(Clone, Debug)]
pub struct TypeMeta {
    ty: &'static Type,
    type_info: &'static TypeInfo,
    bases: Vec<Type>,
}

impl TypeMeta {
    /// Create a `TypeMeta` without bases.
    #[inline]
    pub fn of<T: Typed + ?Sized>() -> Self {
        let type_info = T::type_info();
        Self {
            ty: type_info.ty(),
            type_info,
            bases: Vec::new(),
        }
    }

    /// Returns the static [`TypeInfo`].
    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    /// Returns the [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> &'static Type {
        self.ty
    }

    crate::info::impl_type_fn!();

    /// Returns the generic arguments of the type.
    #[inline]
    pub const fn generics(&self) -> &'static Generics {
        self.type_info.generics()
    }

    /// Declare that the type implements the abstract `base`.
    ///
    /// Duplicates are ignored.
    pub fn insert_base(&mut self, base: Type) {
        if !self.bases.contains(&base) {
            self.bases.push(base);
        }
    }

    /// Builder form of [`insert_base`](Self::insert_base).
    #[inline]
    pub fn with_base(mut self, base: Type) -> Self {
        self.insert_base(base);
        self
    }

    /// Returns the declared bases, in declaration order.
    #[inline]
    pub fn bases(&self) -> &[Type] {
        &self.bases
    }

    /// Whether `base` is one of the declared bases.
    #[inline]
    pub fn implements_base(&self, base: &Type) -> bool {
        self.bases.contains(base)
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Provides the registry entry of a type.
///
/// Implemented by [`#[derive(Describe)]`](crate::derive::Describe), by
/// [`impl_interface!`](crate::impl_interface) and for the std types listed in
/// [`impls`](crate::impls).
///
/// [`register_dependencies`](GetTypeMeta::register_dependencies) registers
/// the types this one refers to: property types, type arguments and
/// declared bases. Registering a record therefore registers the whole
/// graph reachable from it.
pub trait GetTypeMeta: Typed {
    /// Returns the registry entry of the type.
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    /// Registers the types this type refers to.
    #[inline(always)]
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}
