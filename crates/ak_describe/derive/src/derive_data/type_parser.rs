use quote::{ToTokens, quote};
use syn::{
    GenericParam, Generics, Ident, LitStr, Path, TypeParam, punctuated::Punctuated,
    spanned::Spanned,
};

use crate::utils::StringExpr;

/// Resolves the path strings of the type being implemented.
pub(crate) enum TypeParser<'a> {
    /// Nameable from any scope without a module, e.g. `bool`.
    Primitive(&'a Ident),
    /// Declared at the macro call site, reachable by its ident.
    ///
    /// The module path comes from [`module_path!()`](module_path) unless a
    /// custom path is given.
    Local {
        ident: &'a Ident,
        custom_path: Option<Path>,
        generics: &'a Generics,
    },
    /// Declared elsewhere; the full `::crate_name::module::Type` is required.
    Foreign {
        path: &'a Path,
        custom_path: Option<Path>,
        generics: &'a Generics,
    },
}

impl<'a> TypeParser<'a> {
    pub(crate) fn new_local(
        ident: &'a Ident,
        custom_path: Option<Path>,
        generics: &'a Generics,
    ) -> TypeParser<'a> {
        TypeParser::Local {
            ident,
            custom_path,
            generics,
        }
    }

    pub(crate) fn new_foreign(
        ident: &'a Ident,
        path: &'a Path,
        custom_path: Option<Path>,
        generics: &'a Generics,
    ) -> TypeParser<'a> {
        if custom_path.is_none() && path.leading_colon.is_none() && path.segments.len() == 1 {
            TypeParser::Primitive(ident)
        } else {
            TypeParser::Foreign {
                path,
                custom_path,
                generics,
            }
        }
    }

    pub(super) fn generics(&self) -> &'a Generics {
        const EMPTY_GENERICS: &Generics = &Generics {
            gt_token: None,
            lt_token: None,
            where_clause: None,
            params: Punctuated::new(),
        };

        match self {
            Self::Local { generics, .. } | Self::Foreign { generics, .. } => generics,
            Self::Primitive(_) => EMPTY_GENERICS,
        }
    }

    /// Whether the impls must cache per instantiation.
    pub(super) fn impl_with_generic(&self) -> bool {
        !self
            .generics()
            .params
            .iter()
            .all(|param| matches!(param, GenericParam::Lifetime(_)))
    }

    /// Used in `impl ... for #real_ident`.
    pub(super) fn real_ident(&self) -> proc_macro2::TokenStream {
        match self {
            Self::Local { ident, .. } | Self::Primitive(ident) => ident.to_token_stream(),
            Self::Foreign { path, .. } => path.to_token_stream(),
        }
    }

    fn get_ident(&self) -> &Ident {
        let path = match self {
            Self::Primitive(ident) => return ident,
            Self::Local {
                ident, custom_path, ..
            } => match custom_path {
                Some(path) => path,
                None => return ident,
            },
            Self::Foreign {
                path, custom_path, ..
            } => custom_path.as_ref().unwrap_or(path),
        };
        // Paths reaching here were parsed non-empty.
        &path.segments[path.segments.len() - 1].ident
    }

    /// Full (custom) path without generics, when known at expansion time.
    fn get_path(&self) -> Option<&Path> {
        match self {
            Self::Local { custom_path, .. } => custom_path.as_ref(),
            Self::Foreign {
                path, custom_path, ..
            } => Some(custom_path.as_ref().unwrap_or(path)),
            Self::Primitive(_) => None,
        }
    }

    pub(super) fn module_path(&self) -> Option<StringExpr> {
        if let Some(path) = self.get_path() {
            let path_string = path
                .segments
                .iter()
                .take(path.segments.len().saturating_sub(1))
                .map(|segment| segment.ident.to_string())
                .collect::<Vec<_>>()
                .join("::");

            let path_lit = LitStr::new(&path_string, path.span());
            return Some(StringExpr::from_lit(&path_lit));
        }

        match self {
            Self::Local { .. } => Some(StringExpr::Const(quote! {
                ::core::module_path!()
            })),
            _ => None,
        }
    }

    pub(super) fn type_ident(&self) -> StringExpr {
        StringExpr::from(self.get_ident())
    }

    /// Joins type and const generics with `", "`.
    ///
    /// `ty_generic_fn` maps each [`TypeParam`] to its string.
    fn reduce_generics(
        generics: &Generics,
        mut ty_generic_fn: impl FnMut(&TypeParam) -> StringExpr,
        ak_describe_path: &Path,
    ) -> StringExpr {
        let macro_utils_ = crate::path::macro_utils_(ak_describe_path);

        let mut params = generics.params.iter().filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(ty_generic_fn(type_param)),
            GenericParam::Const(const_param) => {
                let ident = &const_param.ident;
                let ty = &const_param.ty;

                Some(StringExpr::Owned(quote! {
                    <#ty as #macro_utils_::ToString>::to_string(&#ident)
                }))
            }
            GenericParam::Lifetime(_) => None,
        });

        let first = params.next().into_iter();

        StringExpr::from_iter(
            first.chain(params.flat_map(|x| [StringExpr::from_str(", "), x])),
            ak_describe_path,
        )
    }

    /// For `alloc::vec::Vec<core::time::Duration>` this is `"Vec<Duration>"`.
    pub(super) fn type_name(&self, ak_describe_path: &Path) -> StringExpr {
        match self {
            Self::Primitive(ident) => StringExpr::from(ident),
            Self::Local { generics, .. } | Self::Foreign { generics, .. } => {
                let type_ident = self.type_ident();

                if !self.impl_with_generic() {
                    return type_ident;
                }

                let type_path_ = crate::path::type_path_(ak_describe_path);
                let generics = TypeParser::reduce_generics(
                    generics,
                    |TypeParam { ident, .. }| {
                        StringExpr::Borrowed(quote! {
                            <#ident as #type_path_>::type_name()
                        })
                    },
                    ak_describe_path,
                );

                StringExpr::from_iter(
                    [
                        type_ident,
                        StringExpr::from_str("<"),
                        generics,
                        StringExpr::from_str(">"),
                    ],
                    ak_describe_path,
                )
            }
        }
    }

    /// For `Vec<Duration>` this is `"alloc::vec::Vec<core::time::Duration>"`.
    pub(super) fn type_path(&self, ak_describe_path: &Path) -> StringExpr {
        // Only primitives lack a module path.
        let Some(module_path) = self.module_path() else {
            return StringExpr::from(self.get_ident());
        };

        let type_ident = self.type_ident();
        if !self.impl_with_generic() {
            return StringExpr::from_iter(
                [module_path, StringExpr::from_str("::"), type_ident],
                ak_describe_path,
            );
        }

        let type_path_ = crate::path::type_path_(ak_describe_path);
        let generics = TypeParser::reduce_generics(
            self.generics(),
            |TypeParam { ident, .. }| {
                StringExpr::Borrowed(quote! {
                    <#ident as #type_path_>::type_path()
                })
            },
            ak_describe_path,
        );

        StringExpr::from_iter(
            [
                module_path,
                StringExpr::from_str("::"),
                type_ident,
                StringExpr::from_str("<"),
                generics,
                StringExpr::from_str(">"),
            ],
            ak_describe_path,
        )
    }
}
