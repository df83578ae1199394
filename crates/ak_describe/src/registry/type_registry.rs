use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;
use core::time::Duration;
use std::time::SystemTime;

use ak_utils::TypeIdMap;
use ak_utils::hash::{HashMap, HashSet};

use crate::info::{Type, TypeInfo};
use crate::registry::{GetTypeMeta, TypeMeta};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of described types.
///
/// Lookups by [`TypeId`], full type path and short type name; a short name
/// shared by two types is ambiguous and no longer resolves.
///
/// The registry also answers assignability: each entry's declared bases
/// are indexed, so [`implementors_of`](Self::implementors_of) lists the
/// concrete types registered for an abstract base, in registration order.
///
/// # Examples
///
/// ```
/// use ak_describe::derive::Describe;
/// use ak_describe::info::Type;
/// use ak_describe::registry::TypeRegistry;
///
/// pub trait Shape {}
/// ak_describe::impl_interface!(dyn Shape);
///
/// #[derive(Describe)]
/// #[describe(implements(dyn Shape))]
/// pub struct Circle { pub radius: f64 }
/// impl Shape for Circle {}
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Circle>();
///
/// let base = Type::of::<dyn Shape>();
/// assert!(registry.contains(base.id()));
/// assert_eq!(registry.implementors_of(base.id()), &[Type::of::<Circle>()]);
/// ```
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    implementors: TypeIdMap<Vec<Type>>,
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a registry without any types.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(ak_utils::hash::FixedHashState),
            type_name_to_id: HashMap::with_hasher(ak_utils::hash::FixedHashState),
            ambiguous_names: HashSet::with_hasher(ak_utils::hash::FixedHashState),
            implementors: TypeIdMap::new(),
        }
    }

    /// Create a registry with the built-in leaf types.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<str>();
        registry.register::<String>();
        registry.register::<Duration>();
        registry.register::<SystemTime>();
        registry
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(&mut self, type_meta: &TypeMeta) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        if !self.ambiguous_names.contains(type_name) {
            if self.type_name_to_id.contains_key(type_name) {
                self.type_name_to_id.remove(type_name);
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, ty.id());
            }
        }

        if let Some(previous) = self.type_path_to_id.insert(ty.path(), ty.id()) {
            log::warn!(
                "type path `{}` is shared by two distinct types; lookups by path now resolve to the later one",
                ty.path()
            );
            debug_assert_ne!(previous, ty.id());
        }

        for base in type_meta.bases() {
            self.add_implementor(base, ty);
        }
    }

    fn add_implementor(&mut self, base: &Type, implementor: &Type) {
        let list = self.implementors.get_or_insert(base.id(), Vec::new);
        if !list.contains(implementor) {
            list.push(*implementor);
        }
    }

    /// Insert a `TypeMeta` unless the type is already registered.
    ///
    /// Returns `true` if it was inserted. Dependencies are not registered.
    pub fn try_insert_type_meta(&mut self, type_meta: TypeMeta) -> bool {
        if self.type_meta_table.contains(&type_meta.ty_id()) {
            return false;
        }
        self.add_new_type_indices(&type_meta);
        self.type_meta_table.insert(type_meta.ty_id(), type_meta);
        true
    }

    /// Register `T` and, the first time, everything it refers to.
    ///
    /// Registering an already registered type does nothing, so cyclic
    /// graphs terminate.
    pub fn register<T: GetTypeMeta + ?Sized>(&mut self) {
        if self.type_meta_table.contains(&TypeId::of::<T>()) {
            return;
        }
        let meta = T::get_type_meta();
        log::trace!("registering `{}`", meta.type_path());
        self.add_new_type_indices(&meta);
        self.type_meta_table.insert(TypeId::of::<T>(), meta);
        T::register_dependencies(self);
    }

    /// Declare that `S` implements the abstract base `B`.
    ///
    /// Both types are registered if needed. This is the manual form of
    /// `#[describe(implements(dyn B))]`.
    pub fn register_implementor<B, S>(&mut self)
    where
        B: GetTypeMeta + ?Sized,
        S: GetTypeMeta + ?Sized,
    {
        self.register::<B>();
        self.register::<S>();
        let base = Type::of::<B>();
        let sub = Type::of::<S>();
        if let Some(meta) = self.type_meta_table.get_mut(&sub.id()) {
            meta.insert_base(base);
        }
        self.add_implementor(&base, &sub);
    }

    /// Collect every type marked `#[describe(auto_register)]`.
    ///
    /// Returns `false` when the `auto_register` feature is disabled or the
    /// platform does not support static collection.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        return {
            use crate::__macro_exports::auto_register;
            // Reduce the cost of repeated calls.
            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        };
        #[cfg(not(feature = "auto_register"))]
        return false;
    }

    /// Whether the type is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Returns the entry of a registered type.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns the entry for a full type path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the entry for a short type name, unless it is ambiguous.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Whether two or more registered types share the short name.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the [`TypeInfo`] of a registered type.
    #[inline]
    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    /// The types registered as implementors of `base`, in registration order.
    pub fn implementors_of(&self, base: TypeId) -> &[Type] {
        match self.implementors.get(&base) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Whether a value of `sub` can stand where `base` is expected.
    ///
    /// True for `base == sub` and for registered implementors.
    pub fn is_assignable(&self, base: TypeId, sub: TypeId) -> bool {
        base == sub || self.implementors_of(base).iter().any(|ty| ty.id() == sub)
    }

    /// Iterate over all entries in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    /// Whether no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use crate::info::{PropertyInfo, StructInfo, Type, TypeInfo, TypePath, Typed};
    use crate::impls::NonGenericTypeInfoCell;
    use crate::registry::{GetTypeMeta, TypeRegistry};

    pub trait Vehicle {}

    crate::impl_interface!(dyn Vehicle { wheels: u8 });

    macro_rules! record {
        ($name:ident, $path:literal, $ident:literal) => {
            struct $name;

            impl TypePath for $name {
                fn type_path() -> &'static str {
                    $path
                }
                fn type_name() -> &'static str {
                    $ident
                }
                fn type_ident() -> &'static str {
                    $ident
                }
            }

            impl Typed for $name {
                fn type_info() -> &'static TypeInfo {
                    static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                    CELL.get_or_init(|| {
                        TypeInfo::Struct(StructInfo::new::<Self>(&[PropertyInfo::new::<
                            Vec<Box<dyn Vehicle>>,
                        >("trailers")]))
                    })
                }
            }

            impl GetTypeMeta for $name {
                fn register_dependencies(registry: &mut TypeRegistry) {
                    registry.register::<Vec<Box<dyn Vehicle>>>();
                }
            }
        };
    }

    record!(Car, "garage::Car", "Car");
    record!(Truck, "garage::Truck", "Truck");
    record!(OtherCar, "yard::Car", "Car");

    #[test]
    fn registers_dependencies() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Car>();

        assert!(registry.contains(TypeId::of::<Vec<Box<dyn Vehicle>>>()));
        assert!(registry.contains(TypeId::of::<Box<dyn Vehicle>>()));
        assert!(registry.contains(TypeId::of::<dyn Vehicle>()));
        assert!(registry.contains(TypeId::of::<u8>()));
    }

    #[test]
    fn ambiguous_short_names() {
        let mut registry = TypeRegistry::new();
        registry.register::<Car>();
        assert!(registry.get_with_type_name("Car").is_some());

        registry.register::<OtherCar>();
        assert!(registry.is_ambiguous("Car"));
        assert!(registry.get_with_type_name("Car").is_none());
        assert!(registry.get_with_type_path("yard::Car").is_some());
        assert!(registry.get_with_type_path("garage::Car").is_some());
    }

    #[test]
    fn implementors_in_registration_order() {
        let mut registry = TypeRegistry::new();
        registry.register_implementor::<dyn Vehicle, Truck>();
        registry.register_implementor::<dyn Vehicle, Car>();
        registry.register_implementor::<dyn Vehicle, Truck>();

        let base = TypeId::of::<dyn Vehicle>();
        assert_eq!(
            registry.implementors_of(base),
            &[Type::of::<Truck>(), Type::of::<Car>()]
        );
        assert!(registry.is_assignable(base, TypeId::of::<Car>()));
        assert!(registry.is_assignable(base, base));
        assert!(!registry.is_assignable(base, TypeId::of::<OtherCar>()));
        assert!(registry.get(TypeId::of::<Car>()).unwrap().implements_base(&Type::of::<dyn Vehicle>()));
    }

    #[test]
    fn unknown_base_has_no_implementors() {
        let registry = TypeRegistry::new();
        assert!(registry.implementors_of(TypeId::of::<dyn Vehicle>()).is_empty());
    }
}
