use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::impls::GenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_path_cell_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::impls::GenericTypePathCell
    }
}
