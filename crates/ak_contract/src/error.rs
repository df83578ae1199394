use alloc::string::String;

use thiserror::Error;

use crate::keys::Key;

// -----------------------------------------------------------------------------
// Error

/// A contract that cannot be built or verified.
///
/// Every variant is fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContractError {
    #[error("property `{property}` of `{ty}` is already keyed {existing}, cannot rekey it {requested}")]
    ConflictingPropertyKey {
        ty: &'static str,
        property: &'static str,
        existing: Key,
        requested: Key,
    },

    #[error("key {key} of `{ty}` is claimed by both `{first}` and `{second}`")]
    DuplicatePropertyKey {
        ty: &'static str,
        key: Key,
        first: &'static str,
        second: &'static str,
    },

    #[error("`{ty}` describes property `{property}` twice")]
    DuplicateProperty {
        ty: &'static str,
        property: &'static str,
    },

    #[error("`{ty}` describes a property without a name")]
    UnnamedProperty { ty: &'static str },

    #[error("`{0}` is not abstract and cannot have subtypes")]
    NotAbstract(&'static str),

    #[error("`{0}` is abstract and cannot be a subtype")]
    AbstractSubtype(&'static str),

    #[error("`{sub}` is not registered as assignable to `{base}`")]
    NotAssignable {
        base: &'static str,
        sub: &'static str,
    },

    #[error("fingerprint mismatch: expected {expected}, computed {actual}")]
    FingerprintMismatch { expected: String, actual: String },

    #[error("`{0}` is not a 128 digit hexadecimal fingerprint")]
    InvalidFingerprint(String),
}
