use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Access

/// Visibility of one accessor of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Access {
    /// Readable or writable from anywhere.
    #[default]
    Public,
    /// Exists, but only inside the declaring crate or module.
    Restricted,
    /// No such accessor.
    Absent,
}

impl Access {
    /// Returns `true` for [`Access::Public`].
    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Access::Public)
    }
}

// -----------------------------------------------------------------------------
// PropertyInfo

/// A named property of a record or interface.
///
/// `#[derive(Describe)]` creates one per field: `pub` fields get a public
/// getter and setter, other fields get restricted ones, and
/// `#[describe(read_only)]` removes the setter.
///
/// # Examples
///
/// ```
/// use ak_describe::info::{Access, PropertyInfo};
///
/// let prop = PropertyInfo::new::<String>("name");
/// assert!(prop.is_public_read_write());
/// assert_eq!(prop.type_path(), "alloc::string::String");
///
/// let prop = prop.read_only();
/// assert_eq!(prop.setter(), Access::Absent);
/// assert!(!prop.is_public_read_write());
/// ```
#[derive(Clone, Debug)]
pub struct PropertyInfo {
    name: &'static str,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
    getter: Access,
    setter: Access,
    index_arity: usize,
}

impl PropertyInfo {
    /// Create a public, non-indexed property of type `T`.
    #[inline]
    pub const fn new<T: Typed + ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
            getter: Access::Public,
            setter: Access::Public,
            index_arity: 0,
        }
    }

    /// Replace the getter access.
    #[inline]
    pub const fn with_getter(mut self, access: Access) -> Self {
        self.getter = access;
        self
    }

    /// Replace the setter access.
    #[inline]
    pub const fn with_setter(mut self, access: Access) -> Self {
        self.setter = access;
        self
    }

    /// Remove the setter.
    #[inline]
    pub const fn read_only(self) -> Self {
        self.with_setter(Access::Absent)
    }

    /// Mark the property as an indexer taking `arity` index arguments.
    #[inline]
    pub const fn with_index_arity(mut self, arity: usize) -> Self {
        self.index_arity = arity;
        self
    }

    /// Returns the property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`Type`] of the property value.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the type path of the property value.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// Returns the description of the property value.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns the getter access.
    #[inline]
    pub const fn getter(&self) -> Access {
        self.getter
    }

    /// Returns the setter access.
    #[inline]
    pub const fn setter(&self) -> Access {
        self.setter
    }

    /// Returns the number of index arguments; `0` for a plain property.
    #[inline]
    pub const fn index_arity(&self) -> usize {
        self.index_arity
    }

    /// Public getter, public setter and no index arguments.
    #[inline]
    pub const fn is_public_read_write(&self) -> bool {
        self.getter.is_public() && self.setter.is_public() && self.index_arity == 0
    }
}
