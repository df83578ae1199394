use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn type_path_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::info::Type
    }
}

#[inline(always)]
pub(crate) fn type_info_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn struct_info_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn enum_info_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::info::EnumInfo
    }
}

#[inline(always)]
pub(crate) fn property_info_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::info::PropertyInfo
    }
}

#[inline(always)]
pub(crate) fn access_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::info::Access
    }
}

#[inline(always)]
pub(crate) fn generics_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::info::Generics
    }
}

#[inline(always)]
pub(crate) fn type_param_info_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::info::TypeParamInfo
    }
}
