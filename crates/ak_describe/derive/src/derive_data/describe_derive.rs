use syn::{Data, DeriveInput, Fields, GenericParam, spanned::Spanned};

use super::{
    DescribeEnum, DescribeMeta, DescribeStruct, FieldAttributes, StructField, TypeAttributes,
    TypeParser,
};

/// The parsed input of `#[derive(Describe)]`.
pub(crate) enum DescribeDerive<'a> {
    Struct(DescribeStruct<'a>),
    Enum(DescribeEnum<'a>),
}

impl<'a> DescribeDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(lifetime) = input
            .generics
            .params
            .iter()
            .find(|param| matches!(param, GenericParam::Lifetime(_)))
        {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Describe` cannot be derived for types with lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let custom_path = attrs.type_path.clone();
        let parser = TypeParser::new_local(&input.ident, custom_path, &input.generics);
        let meta = DescribeMeta::new(attrs, parser);

        match &input.data {
            Data::Struct(data) => {
                let fields = match &data.fields {
                    Fields::Named(named) => named
                        .named
                        .iter()
                        .enumerate()
                        .map(|(index, field)| StructField::new(field, index))
                        .collect::<syn::Result<Vec<_>>>()?,
                    Fields::Unit => Vec::new(),
                    Fields::Unnamed(unnamed) => {
                        return Err(syn::Error::new(
                            unnamed.span(),
                            "`Describe` cannot be derived for tuple structs, name the fields",
                        ));
                    }
                };
                Ok(Self::Struct(DescribeStruct::new(meta, fields)?))
            }
            Data::Enum(data) => {
                for variant in &data.variants {
                    if !matches!(variant.fields, Fields::Unit) {
                        return Err(syn::Error::new(
                            variant.span(),
                            "`Describe` only supports enums whose variants carry no data",
                        ));
                    }
                    // Attributes on variants are not meaningful.
                    FieldAttributes::reject(&variant.attrs)?;
                }
                let variants = data.variants.iter().map(|v| &v.ident).collect();
                Ok(Self::Enum(DescribeEnum::new(meta, variants)))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span(),
                "`Describe` cannot be derived for unions",
            )),
        }
    }

    pub fn meta(&self) -> &DescribeMeta<'a> {
        match self {
            Self::Struct(data) => data.meta(),
            Self::Enum(data) => data.meta(),
        }
    }
}
