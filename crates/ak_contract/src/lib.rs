#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod classifier;
mod configuration;
mod error;
mod keys;
mod selector;
mod validation;
mod walker;

#[cfg(test)]
mod samples;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use builder::{ContractBuilder, ContractOptions};
pub use classifier::{Classification, Classifier, ModuleScope};
pub use configuration::{Configuration, ContractSink, NativeFormatters};
pub use error::ContractError;
pub use keys::{Key, KeyAssigner, PropertyKeyMapping, SubtypeKeyMapping};
pub use selector::PropertySelector;
pub use validation::{Fingerprint, KeyTable, Validation};
pub use walker::{TypeGraphWalker, UserTypeSet};
