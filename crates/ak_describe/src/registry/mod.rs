//! Type registry for looking descriptions up without a type parameter.
//!
//! ## Menu
//!
//! - [`TypeMeta`]: a [`TypeInfo`] plus the abstract bases the type implements.
//! - [`GetTypeMeta`]: a trait providing a type's `TypeMeta` and its dependencies.
//! - [`TypeRegistry`]: a container storing `TypeMeta`s, indexed by id, path
//!   and short name, with an implementors index per abstract base.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`].
//!
//! Types marked `#[describe(auto_register)]` are collected with the
//! [`inventory`](https://docs.rs/inventory) crate. Not every platform
//! supports it; there `auto_register` returns `false` and does nothing.
//!
//! [`TypeInfo`]: crate::info::TypeInfo

// -----------------------------------------------------------------------------
// Modules

mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
