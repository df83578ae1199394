use core::{error, fmt};

use crate::info::{ArrayInfo, ListInfo, MapInfo, SetInfo};
use crate::info::{EnumInfo, InterfaceInfo, OpaqueInfo, StructInfo};
use crate::info::{Generics, PropertyInfo, Type};
use crate::info::{OptionInfo, PointerInfo};

// -----------------------------------------------------------------------------
// DescribeKind

/// An enumeration of the "kinds" of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescribeKind {
    Struct,
    Enum,
    List,
    Array,
    Map,
    Set,
    Option,
    Pointer,
    Opaque,
    Interface,
}

impl fmt::Display for DescribeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Enum => f.pad("Enum"),
            Self::List => f.pad("List"),
            Self::Array => f.pad("Array"),
            Self::Map => f.pad("Map"),
            Self::Set => f.pad("Set"),
            Self::Option => f.pad("Option"),
            Self::Pointer => f.pad("Pointer"),
            Self::Opaque => f.pad("Opaque"),
            Self::Interface => f.pad("Interface"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `DescribeKind`.
#[derive(Debug)]
pub struct DescribeKindError {
    pub expected: DescribeKind,
    pub received: DescribeKind,
}

impl fmt::Display for DescribeKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "describe kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for DescribeKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// The compile-time description of one type.
///
/// # Content
///
/// - **kind**: see [`DescribeKind`].
/// - **id** and **names**: see [`Type`].
/// - **generics**: the instantiated type arguments, see [`Generics`].
/// - **properties**: for records and interfaces, see [`PropertyInfo`].
///
/// # Obtain
///
/// 1. [`Typed::type_info`] when the type is known at compile time.
/// 2. [`TypeRegistry::get_type_info`] from a [`TypeId`] or a path.
///
/// Both return the same `&'static TypeInfo`, so two descriptors can be
/// compared by [`TypeInfo::ty`].
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`TypeRegistry::get_type_info`]: crate::registry::TypeRegistry::get_type_info
/// [`TypeId`]: core::any::TypeId
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Enum(EnumInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Map(MapInfo),
    Set(SetInfo),
    Option(OptionInfo),
    Pointer(PointerInfo),
    Opaque(OpaqueInfo),
    Interface(InterfaceInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, DescribeKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(DescribeKindError {
                    expected: DescribeKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_set: Set => SetInfo);
    impl_cast_method!(as_option: Option => OptionInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);
    impl_cast_method!(as_interface: Interface => InterfaceInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Set(info) => info.ty(),
            Self::Option(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
            Self::Interface(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`DescribeKind`] for this `TypeInfo` (a fast discriminator).
    ///
    /// # Examples
    ///
    /// ```
    /// use ak_describe::info::{Typed, DescribeKind};
    ///
    /// assert_eq!(i32::type_info().kind(), DescribeKind::Opaque);
    /// assert_eq!(<Vec<i32>>::type_info().kind(), DescribeKind::List);
    /// ```
    pub const fn kind(&self) -> DescribeKind {
        match self {
            Self::Struct(_) => DescribeKind::Struct,
            Self::Enum(_) => DescribeKind::Enum,
            Self::List(_) => DescribeKind::List,
            Self::Array(_) => DescribeKind::Array,
            Self::Map(_) => DescribeKind::Map,
            Self::Set(_) => DescribeKind::Set,
            Self::Option(_) => DescribeKind::Option,
            Self::Pointer(_) => DescribeKind::Pointer,
            Self::Opaque(_) => DescribeKind::Opaque,
            Self::Interface(_) => DescribeKind::Interface,
        }
    }

    /// Returns the generic arguments of this type.
    pub const fn generics(&self) -> &Generics {
        match self {
            Self::Struct(info) => info.generics(),
            Self::Enum(info) => info.generics(),
            Self::List(info) => info.generics(),
            Self::Array(info) => info.generics(),
            Self::Map(info) => info.generics(),
            Self::Set(info) => info.generics(),
            Self::Option(info) => info.generics(),
            Self::Pointer(info) => info.generics(),
            Self::Opaque(info) => info.generics(),
            Self::Interface(info) => info.generics(),
        }
    }

    /// Returns `true` if the type has at least one generic argument.
    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generics().is_empty()
    }

    /// Returns `true` for interfaces, which cannot be instantiated directly.
    #[inline]
    pub const fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_))
    }

    /// Returns the declared properties of records and interfaces.
    ///
    /// Empty for every other kind.
    pub fn properties(&self) -> &[PropertyInfo] {
        match self {
            Self::Struct(info) => info.properties(),
            Self::Interface(info) => info.properties(),
            _ => &[],
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::{DescribeKind, Typed};

    #[test]
    fn cast_mismatch_reports_kinds() {
        let err = u8::type_info().as_struct().unwrap_err();
        assert_eq!(err.expected, DescribeKind::Struct);
        assert_eq!(err.received, DescribeKind::Opaque);
        assert_eq!(
            alloc::format!("{err}"),
            "describe kind mismatch: expected Struct, received Opaque"
        );
    }

    #[test]
    fn non_records_have_no_properties() {
        assert!(<Vec<u8>>::type_info().properties().is_empty());
        assert!(!<Vec<u8>>::type_info().is_abstract());
        assert!(<Vec<u8>>::type_info().is_generic());
    }
}
