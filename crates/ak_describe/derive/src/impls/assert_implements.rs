use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

use crate::derive_data::DescribeMeta;

/// Checks at compile time that the type implements each declared base.
///
/// Only emitted for non-generic types; a generic type may implement a
/// base for some instantiations only.
pub(crate) fn impl_assert_implements(meta: &DescribeMeta) -> TokenStream {
    if meta.impl_with_generic() || meta.attrs().implements.is_empty() {
        return crate::utils::empty();
    }

    let real_ident = meta.real_ident();
    let coercions = meta.attrs().implements.iter().map(|base| {
        quote_spanned! { base.span() =>
            let _: &(#base) = value;
        }
    });

    quote! {
        const _: () = {
            #[allow(dead_code, unused_parens, reason = "compile-time check only")]
            fn __assert_implements(value: &#real_ident) {
                #(#coercions)*
            }
        };
    }
}
