use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Type, Visibility};

use super::{DescribeMeta, FieldAttributes};

/// A named field of a described struct.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Position in the declaration, skipped fields included.
    pub declaration_index: usize,
}

impl<'a> StructField<'a> {
    pub fn new(data: &'a Field, declaration_index: usize) -> syn::Result<Self> {
        Ok(Self {
            data,
            attrs: FieldAttributes::parse_attrs(&data.attrs)?,
            declaration_index,
        })
    }

    /// The property name: the `rename` value, else the field ident.
    pub fn name(&self) -> String {
        match (&self.attrs.rename, &self.data.ident) {
            (Some(rename), _) => rename.value(),
            (None, Some(ident)) => ident.to_string(),
            (None, None) => self.declaration_index.to_string(),
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.data.ty
    }

    #[inline]
    fn is_public(&self) -> bool {
        matches!(self.data.vis, Visibility::Public(_))
    }
}

pub(crate) struct DescribeStruct<'a> {
    meta: DescribeMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> DescribeStruct<'a> {
    pub fn new(mut meta: DescribeMeta<'a>, fields: Vec<StructField<'a>>) -> syn::Result<Self> {
        let mut names = Vec::<String>::new();
        let mut active_types = Vec::<Type>::new();

        for field in fields.iter().filter(|f| !f.attrs.skip) {
            let name = field.name();
            if names.contains(&name) {
                let span = match &field.attrs.rename {
                    Some(lit) => lit.span(),
                    None => syn::spanned::Spanned::span(field.data),
                };
                return Err(syn::Error::new(span, format!("duplicate property `{name}`")));
            }
            names.push(name);

            if !active_types.contains(field.ty()) {
                active_types.push(field.ty().clone());
            }
        }

        meta.set_active_types(active_types);
        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &DescribeMeta<'a> {
        &self.meta
    }

    /// Described fields in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|f| !f.attrs.skip)
    }

    /// ```ignore
    /// _path_::TypeInfo::Struct(
    ///     _path_::StructInfo::new::<Self>(&[
    ///         _path_::PropertyInfo::new::<u32>("id"),
    ///         _path_::PropertyInfo::new::<String>("secret")
    ///             .with_getter(_path_::Access::Restricted)
    ///             .with_setter(_path_::Access::Restricted),
    ///     ])
    ///     .with_generics(..)
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let ak_describe_path = self.meta.ak_describe_path();
        let type_info_ = crate::path::type_info_(ak_describe_path);
        let struct_info_ = crate::path::struct_info_(ak_describe_path);
        let property_info_ = crate::path::property_info_(ak_describe_path);
        let access_ = crate::path::access_(ak_describe_path);

        let properties = self.active_fields().map(|field| {
            let ty = field.ty();
            let name = field.name();

            let restricted = if field.is_public() {
                crate::utils::empty()
            } else {
                quote! {
                    .with_getter(#access_::Restricted)
                    .with_setter(#access_::Restricted)
                }
            };
            let read_only = if field.attrs.read_only {
                quote!(.read_only())
            } else {
                crate::utils::empty()
            };

            quote! {
                #property_info_::new::<#ty>(#name) #restricted #read_only
            }
        });

        let with_generics = self.meta.with_generics_expression();

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[ #(#properties),* ])
                    #with_generics
            )
        }
    }

    /// `registry.register::<FieldType>();` for every described field.
    pub fn register_dependencies_tokens(&self) -> TokenStream {
        let types = self.meta.active_types();
        quote! {
            #(registry.register::<#types>();)*
        }
    }
}
