use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{Bound, DescribeMeta};

/// Generate implementation code for `GetTypeMeta`.
///
/// Declared bases become `TypeMeta` bases and are registered along with
/// the field types in `register_dependencies`.
pub(crate) fn impl_trait_get_type_meta(
    meta: &DescribeMeta,
    register_fields_tokens: TokenStream,
) -> TokenStream {
    let ak_describe_path = meta.ak_describe_path();
    let get_type_meta_ = crate::path::get_type_meta_(ak_describe_path);
    let type_meta_ = crate::path::type_meta_(ak_describe_path);
    let type_registry_ = crate::path::type_registry_(ak_describe_path);
    let type_ = crate::path::type_(ak_describe_path);

    let bases = &meta.attrs().implements;

    let get_type_meta_fn = if bases.is_empty() {
        crate::utils::empty()
    } else {
        quote! {
            fn get_type_meta() -> #type_meta_ {
                #type_meta_::of::<Self>()
                    #(.with_base(#type_::of::<#bases>()))*
            }
        }
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(Bound::GetTypeMeta);

    quote! {
        impl #impl_generics #get_type_meta_ for #real_ident #ty_generics #where_clause {
            #get_type_meta_fn

            #[allow(unused_variables, reason = "types without dependencies")]
            fn register_dependencies(registry: &mut #type_registry_) {
                #register_fields_tokens
                #(registry.register::<#bases>();)*
            }
        }
    }
}
