#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names `::ak_describe`, which must also resolve inside this
// crate (tests, doc tests).
extern crate self as ak_describe;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod impls;
pub mod info;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use ak_describe_derive as derive;
