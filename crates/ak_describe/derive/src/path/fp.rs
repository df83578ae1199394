//! Fully qualified prelude items, immune to shadowing at the call site.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

pub(crate) struct OptionFP;

impl ToTokens for OptionFP {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(quote!(::core::option::Option));
    }
}
