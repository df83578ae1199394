//! Compile-time descriptions of the types a contract is built from.
//!
//! ## Menu
//!
//! - [`TypePath`]: stable type names, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): full name, the identifier printed in key tables.
//!     - [`type_name`](TypePath::type_name): the name without module path, may be duplicated.
//!     - [`type_ident`](TypePath::type_ident): the name without generics and module path.
//!     - [`module_path`](TypePath::module_path): optional module path (e.g. "shop::orders").
//!
//! - [`TypePathTable`]: four function pointers for a single type's `TypePath` implementation.
//!
//! - [`Type`]: a `TypeId` plus a `TypePathTable`.
//!
//! - [`Generics`]: the instantiated type arguments, a list of [`TypeParamInfo`].
//!
//! - [`TypeInfo`]: the description of one type, one of:
//!     - [`StructInfo`]: a record with named properties (`struct A { .. }`, `struct A;`).
//!     - [`EnumInfo`]: a fieldless enum, encoded natively.
//!     - [`ListInfo`]: `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, `[T]`.
//!     - [`ArrayInfo`]: `[T; N]`.
//!     - [`MapInfo`]: `BTreeMap<K, V>`, `HashMap<K, V>`.
//!     - [`SetInfo`]: `BTreeSet<T>`, `HashSet<T>`.
//!     - [`OptionInfo`]: `Option<T>`.
//!     - [`PointerInfo`]: `Box<T>`, `Rc<T>`, `Arc<T>`.
//!     - [`OpaqueInfo`]: leaf types, either built-in (`u32`, `String`) or external.
//!     - [`InterfaceInfo`]: an abstract base (`dyn Trait`).
//!
//! - [`PropertyInfo`]: a named property with getter and setter [`Access`].
//!
//! - [`DescribeKind`]: the fast discriminator of a `TypeInfo`.
//!
//! - [`Typed`]: a static accessor to `&'static TypeInfo`.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod enum_info;
mod generics;
mod interface_info;
mod list_info;
mod map_info;
mod opaque_info;
mod option_info;
mod pointer_info;
mod property_info;
mod set_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

use generics::impl_generic_fn;

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use enum_info::EnumInfo;
pub use generics::{Generics, TypeParamInfo};
pub use interface_info::InterfaceInfo;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use option_info::OptionInfo;
pub use pointer_info::{PointerInfo, PointerKind};
pub use property_info::{Access, PropertyInfo};
pub use set_info::SetInfo;
pub use struct_info::StructInfo;
pub use type_info::{DescribeKind, DescribeKindError, TypeInfo};
pub use type_path::{Type, TypePath, TypePathTable};
pub use typed::Typed;
