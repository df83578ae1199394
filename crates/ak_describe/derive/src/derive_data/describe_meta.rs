use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, ImplGenerics, Path, Token, Type, TypeGenerics, punctuated::Punctuated};

use super::{TypeAttributes, TypeParser};
use crate::utils::StringExpr;

/// Everything about the type being implemented except its body.
pub(crate) struct DescribeMeta<'a> {
    ak_describe_path: Path,
    attrs: TypeAttributes,
    type_parser: TypeParser<'a>,
    /// Field types, in declaration order, without duplicates.
    active_types: Vec<Type>,
}

impl<'a> DescribeMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_parser: TypeParser<'a>) -> Self {
        Self {
            attrs,
            type_parser,
            ak_describe_path: crate::path::ak_describe(),
            active_types: Vec::new(),
        }
    }

    /// Set by the struct parser once the described fields are known.
    pub(super) fn set_active_types(&mut self, active_types: Vec<Type>) {
        self.active_types = active_types;
    }

    #[inline]
    pub fn ak_describe_path(&self) -> &Path {
        &self.ak_describe_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn active_types(&self) -> &[Type] {
        &self.active_types
    }

    /// ```ignore
    /// .with_generics(_path_::Generics::from([
    ///     _path_::TypeParamInfo::new::<T>("T"),
    /// ]))
    /// ```
    ///
    /// Const parameters only show up in the type path.
    pub fn with_generics_expression(&self) -> TokenStream {
        let generics_ = crate::path::generics_(&self.ak_describe_path);
        let type_param_info_ = crate::path::type_param_info_(&self.ak_describe_path);

        let params = self
            .generics()
            .type_params()
            .map(|param| {
                let ident = &param.ident;
                let name = ident.to_string();
                quote! { #type_param_info_::new::<#ident>(#name) }
            })
            .collect::<Punctuated<_, Token![,]>>();

        if params.is_empty() {
            return crate::utils::empty();
        }

        quote! {
            .with_generics(#generics_::from([ #params ]))
        }
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.type_parser.generics()
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.type_parser.impl_with_generic()
    }

    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.type_parser.real_ident()
    }

    #[inline]
    pub fn module_path(&self) -> Option<StringExpr> {
        self.type_parser.module_path()
    }

    #[inline]
    pub fn type_ident(&self) -> StringExpr {
        self.type_parser.type_ident()
    }

    #[inline]
    pub fn type_name(&self) -> StringExpr {
        self.type_parser.type_name(&self.ak_describe_path)
    }

    #[inline]
    pub fn type_path(&self) -> StringExpr {
        self.type_parser.type_path(&self.ak_describe_path)
    }

    #[inline]
    pub fn type_name_into_owned(&self) -> TokenStream {
        self.type_name().into_owned(&self.ak_describe_path)
    }

    #[inline]
    pub fn type_path_into_owned(&self) -> TokenStream {
        self.type_path().into_owned(&self.ak_describe_path)
    }

    /// A primitive given to `impl_type_path!` must name a real type.
    pub fn assert_ident_tokens(&self) -> TokenStream {
        if let TypeParser::Primitive(_) = &self.type_parser {
            let ident = self.real_ident();
            return quote! {
                mod __assert_primitive_ident {
                    type AssertIdentValidity = #ident;
                }
            };
        }
        crate::utils::empty()
    }

    /// Returns `impl_generics`, `ty_generics` and the where clause.
    ///
    /// ```ignore
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(Bound::Typed);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #real_ident #ty_generics #where_clause {}
    /// }
    /// ```
    ///
    /// User predicates are kept. Every type parameter gains the bound of
    /// the trait being implemented (`TypePath`, `Typed` or `GetTypeMeta`),
    /// and so does every field type that mentions a type parameter.
    /// `TypePath` ignores field types.
    pub fn split_generics(&self, bound: Bound) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let generics = self.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let mut generic_where_clause = quote! { where };

        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let bound_ = match bound {
            Bound::TypePath => crate::path::type_path_(&self.ak_describe_path),
            Bound::Typed => crate::path::typed_(&self.ak_describe_path),
            Bound::GetTypeMeta => crate::path::get_type_meta_(&self.ak_describe_path),
        };

        let type_param_idents = generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect::<Vec<syn::Ident>>();

        let mut predicates: Punctuated<TokenStream, Token![,]> = type_param_idents
            .iter()
            .map(|ident| quote!(#ident: #bound_))
            .collect();

        if bound != Bound::TypePath && !type_param_idents.is_empty() {
            predicates.extend(self.active_types.iter().filter_map(|ty| {
                is_any_ident_in_token_stream(&type_param_idents, ty.to_token_stream())
                    .then(|| quote!(#ty: #bound_))
            }));
        }

        generic_where_clause.extend(quote! { #predicates });

        (impl_generics, ty_generics, generic_where_clause)
    }
}

/// The trait a where clause is built for.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    TypePath,
    Typed,
    GetTypeMeta,
}

/// Do any of `idents` appear in `token_stream`?
fn is_any_ident_in_token_stream(idents: &[syn::Ident], token_stream: TokenStream) -> bool {
    token_stream.into_iter().any(|token_tree| match token_tree {
        proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
        proc_macro2::TokenTree::Group(group) => {
            is_any_ident_in_token_stream(idents, group.stream())
        }
        _ => false,
    })
}
