use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_meta_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::registry::TypeMeta
    }
}

#[inline]
pub(crate) fn get_type_meta_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::registry::GetTypeMeta
    }
}

#[inline]
pub(crate) fn type_registry_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::registry::TypeRegistry
    }
}
