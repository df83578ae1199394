use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use super::DescribeMeta;

/// A fieldless enum.
pub(crate) struct DescribeEnum<'a> {
    meta: DescribeMeta<'a>,
    variants: Vec<&'a Ident>,
}

impl<'a> DescribeEnum<'a> {
    pub fn new(meta: DescribeMeta<'a>, variants: Vec<&'a Ident>) -> Self {
        Self { meta, variants }
    }

    #[inline]
    pub fn meta(&self) -> &DescribeMeta<'a> {
        &self.meta
    }

    /// ```ignore
    /// _path_::TypeInfo::Enum(
    ///     _path_::EnumInfo::new::<Self>(&["Left", "Right"])
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let ak_describe_path = self.meta.ak_describe_path();
        let type_info_ = crate::path::type_info_(ak_describe_path);
        let enum_info_ = crate::path::enum_info_(ak_describe_path);

        let names = self.variants.iter().map(|ident| ident.to_string());
        let with_generics = self.meta.with_generics_expression();

        quote! {
            #type_info_::Enum(
                #enum_info_::new::<Self>(&[ #(#names),* ])
                    #with_generics
            )
        }
    }
}
