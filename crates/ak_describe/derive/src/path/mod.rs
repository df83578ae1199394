//! Paths into `ak_describe` used by generated code.
//!
//! Keeping them in one place limits the changes needed when the runtime
//! crate is reorganized.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// The path under which `ak_describe` is reachable from the crate being
/// compiled: `::ak_describe`, or `::ak_core::describe` through the facade.
///
/// Reading the manifest is comparatively expensive, so callers resolve it
/// once and pass it around.
pub(crate) fn ak_describe() -> syn::Path {
    ak_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("ak_describe"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod registry;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use registry::*;

#[inline(always)]
pub(crate) fn macro_utils_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::__macro_exports::macro_utils
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(ak_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ak_describe_path::__macro_exports::auto_register
    }
}
