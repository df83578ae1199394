use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::{Attribute, LitStr, Path, Token, Type, parenthesized};

use crate::DESCRIBE_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Type Attributes

/// Container-level `#[describe(...)]` arguments.
///
/// ```ignore
/// #[describe(type_path = "shop::orders::Order")]
/// #[describe(implements(dyn Entity, dyn Audited), auto_register)]
/// ```
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// Full type path, without generics.
    pub type_path: Option<Path>,
    /// `dyn Trait` bases this type is assignable to.
    pub implements: Vec<Type>,
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(DESCRIBE_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("type_path") {
            if self.type_path.is_some() {
                return Err(meta.error("duplicate `type_path`"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            let path = lit.parse_with(Path::parse_mod_style)?;
            if path.leading_colon.is_some() {
                return Err(syn::Error::new(
                    lit.span(),
                    "did not expect a leading double colon (`::`)",
                ));
            }
            if path.segments.len() < 2 {
                return Err(syn::Error::new(
                    lit.span(),
                    "expected a module followed by the type name, e.g. `crate_name::Type`",
                ));
            }
            self.type_path = Some(path);
            Ok(())
        } else if meta.path.is_ident("implements") {
            let content;
            parenthesized!(content in meta.input);
            let bases = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
            for base in bases {
                match &base {
                    Type::TraitObject(obj) if obj.dyn_token.is_some() => {
                        self.implements.push(base);
                    }
                    _ => {
                        return Err(syn::Error::new_spanned(
                            base,
                            "expected a trait object, e.g. `dyn Animal`",
                        ));
                    }
                }
            }
            Ok(())
        } else if meta.path.is_ident("auto_register") {
            if self.auto_register.is_some() {
                return Err(meta.error("duplicate `auto_register`"));
            }
            self.auto_register = Some(meta.path.segments[0].ident.span());
            Ok(())
        } else {
            Err(meta.error(
                "unknown describe attribute, expected `type_path`, `implements` or `auto_register`",
            ))
        }
    }
}

// -----------------------------------------------------------------------------
// Field Attributes

/// Field-level `#[describe(...)]` arguments.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// Leave the field out of the description.
    pub skip: bool,
    /// Readable but never written back.
    pub read_only: bool,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(DESCRIBE_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    /// Errors on any `#[describe(...)]` in `attrs`.
    pub fn reject(attrs: &[Attribute]) -> syn::Result<()> {
        match attrs
            .iter()
            .find(|attr| attr.path().is_ident(DESCRIBE_ATTRIBUTE_NAME))
        {
            Some(attr) => Err(syn::Error::new_spanned(
                attr,
                "`describe` attributes are not supported here",
            )),
            None => Ok(()),
        }
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("skip") {
            self.skip = true;
            Ok(())
        } else if meta.path.is_ident("read_only") {
            self.read_only = true;
            Ok(())
        } else if meta.path.is_ident("rename") {
            if self.rename.is_some() {
                return Err(meta.error("duplicate `rename`"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new(lit.span(), "a property name cannot be empty"));
            }
            self.rename = Some(lit);
            Ok(())
        } else {
            Err(meta.error(
                "unknown describe attribute, expected `skip`, `read_only` or `rename`",
            ))
        }
    }
}
