use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to the compile-time description of a type.
///
/// Implemented by [`#[derive(Describe)]`](crate::derive::Describe) and by
/// [`impl_interface!`](crate::impl_interface); no instance of the type is
/// needed.
///
/// # Examples
///
/// ```
/// use ak_describe::{derive::Describe, info::{Typed, TypeInfo}};
///
/// #[derive(Describe)]
/// struct A { /* ... */ }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// ```
///
/// # Manually Impl
///
/// Useful when a property is not a plain field, for example a computed
/// getter, a restricted setter or an indexer. The cells in
/// [`impls`](crate::impls) cache the description:
///
/// ```
/// use ak_describe::impls::NonGenericTypeInfoCell;
/// use ak_describe::info::{Access, PropertyInfo, StructInfo, TypeInfo, TypePath, Typed};
///
/// struct Counter { value: u32 }
///
/// impl TypePath for Counter {
///     fn type_path() -> &'static str { "demo::Counter" }
///     fn type_name() -> &'static str { "Counter" }
///     fn type_ident() -> &'static str { "Counter" }
///     fn module_path() -> Option<&'static str> { Some("demo") }
/// }
///
/// impl Typed for Counter {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(StructInfo::new::<Self>(&[
///             PropertyInfo::new::<u32>("value").with_setter(Access::Restricted),
///         ])))
///     }
/// }
///
/// let info = Counter::type_info().as_struct().unwrap();
/// assert!(!info.property("value").unwrap().is_public_read_write());
/// ```
pub trait Typed: TypePath {
    /// A static accessor to compile-time type information.
    fn type_info() -> &'static TypeInfo;
}
