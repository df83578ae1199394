//! Procedural macros for `ak_describe`.
//!
//! - [`Describe`](derive_describe)
//! - [`impl_type_path`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static DESCRIBE_ATTRIBUTE_NAME: &str = "describe";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Describe Derivation
///
/// `#[derive(Describe)]` implements `TypePath`, `Typed` and `GetTypeMeta`.
///
/// Supported shapes:
///
/// - structs with named fields, and unit structs: `TypeInfo::Struct`;
/// - enums whose variants carry no data: `TypeInfo::Enum`.
///
/// Tuple structs, data-carrying enums, unions and lifetime parameters are
/// rejected. Type parameters must themselves be described.
///
/// ## Properties
///
/// Every field becomes a property named after it. `pub` fields are public
/// for reading and writing; other fields are `Access::Restricted` both ways.
///
/// ```ignore
/// #[derive(Describe)]
/// pub struct Account {
///     pub id: u64,
///     #[describe(rename = "displayName")]
///     pub display_name: String,
///     #[describe(read_only)]
///     pub created: SystemTime,
///     #[describe(skip)]
///     pub cache: Vec<u8>,
///     secret: String,
/// }
/// ```
///
/// Field attributes:
///
/// - `skip`: leave the field out.
/// - `read_only`: the setter is `Access::Absent`.
/// - `rename = "name"`: use another property name.
///
/// ## Type attributes
///
/// - `type_path = "crate_name::module::Type"`: override the path, which
///   defaults to `module_path!()` plus the ident. Generic arguments are
///   still appended.
/// - `implements(dyn A, dyn B)`: declare `dyn` bases described with
///   `impl_interface!`. Non-generic types are checked to implement them.
/// - `auto_register`: submit the type to `TypeRegistry::auto_register`
///   (feature `auto_register`; ignored for generic types).
///
/// ```ignore
/// #[derive(Describe)]
/// #[describe(implements(dyn Animal), auto_register)]
/// pub struct Bird {
///     pub name: String,
/// }
/// ```
#[proc_macro_derive(Describe, attributes(describe))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    use crate::derive_data::DescribeDerive;

    let ast = parse_macro_input!(input as DeriveInput);

    let derive_data = match DescribeDerive::from_input(&ast) {
        Ok(data) => data,
        Err(err) => return err.into_compile_error().into(),
    };

    let (info_tokens, register_fields_tokens) = match &derive_data {
        DescribeDerive::Struct(data) => {
            (data.to_info_tokens(), data.register_dependencies_tokens())
        }
        DescribeDerive::Enum(data) => (data.to_info_tokens(), utils::empty()),
    };

    let meta = derive_data.meta();

    let type_path_impl = impls::impl_trait_type_path(meta);
    let typed_impl = impls::impl_trait_typed(meta, info_tokens);
    let get_type_meta_impl = impls::impl_trait_get_type_meta(meta, register_fields_tokens);
    let assert_impl = impls::impl_assert_implements(meta);
    let auto_register = impls::get_auto_register_impl(meta);

    quote! {
        const _: () = {
            #type_path_impl

            #typed_impl

            #get_type_meta_impl

            #assert_impl

            #auto_register
        };
    }
    .into()
}

/// Implement `TypePath` for a type declared elsewhere.
///
/// ## Example
///
/// ```ignore
/// // Primitive, the path is the ident.
/// impl_type_path!(u64);
///
/// // A full path; the leading `::` is required and dropped from the string.
/// impl_type_path!(::alloc::string::String);
///
/// // Generics, with bounds where the type needs them.
/// impl_type_path!(::alloc::boxed::Box<T: ?Sized>);
///
/// // A type in scope, reported under another module: `hashbrown::HashMap<..>`.
/// impl_type_path!((in hashbrown) HashMap<K, V, S>);
///
/// // Another module and ident: `core::time::Ins`.
/// impl_type_path!((in core::time as Ins) Instant);
/// ```
#[proc_macro]
pub fn impl_type_path(input: TokenStream) -> TokenStream {
    use crate::derive_data::{DescribeMeta, TypeAttributes, TypeParser, TypePathParser};

    let TypePathParser {
        custom_path,
        type_ident,
        type_path,
        generics,
    } = parse_macro_input!(input with TypePathParser::parse);

    let parser = TypeParser::new_foreign(&type_ident, &type_path, custom_path, &generics);

    let meta = DescribeMeta::new(TypeAttributes::default(), parser);
    let assert_tokens = meta.assert_ident_tokens();

    let type_path_impls = impls::impl_trait_type_path(&meta);

    quote! {
        const _: () = {
            #assert_tokens
            #type_path_impls
        };
    }
    .into()
}
