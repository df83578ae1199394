use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha512};

use crate::{Configuration, ContractError};

// -----------------------------------------------------------------------------
// KeyTable

const SUBTYPES_HEADER: &str = "---Subtypes---";
const PROPERTIES_HEADER: &str = "---Properties---";

/// The textual form of a [`Configuration`], one entry per line.
///
/// ```text
/// ---Subtypes---
/// zoo::Animal
///   - zoo::Bird : 0
///   - zoo::Mammal : 1
/// ---Properties---
/// zoo::Bird
///   - name : 0
/// ```
///
/// Bases are sorted by path, types by registration order, entries by
/// subtype path or property name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyTable {
    lines: Vec<String>,
}

impl KeyTable {
    fn of(configuration: &Configuration) -> Self {
        let mut lines = Vec::new();

        lines.push(SUBTYPES_HEADER.to_owned());
        for mapping in configuration.subtype_mappings() {
            lines.push(mapping.type_path().to_owned());
            for (sub, key) in mapping.iter() {
                lines.push(alloc::format!("  - {} : {key}", sub.type_path()));
            }
        }

        lines.push(PROPERTIES_HEADER.to_owned());
        for mapping in configuration.property_mappings() {
            lines.push(mapping.type_path().to_owned());
            for (name, key) in mapping.sorted_by_name() {
                lines.push(alloc::format!("  - {name} : {key}"));
            }
        }

        Self { lines }
    }

    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The lines joined with `'\n'`, without a trailing newline.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// SHA-512 over [`text`](KeyTable::text).
    pub fn fingerprint(&self) -> Fingerprint {
        let mut hasher = Sha512::new();
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                hasher.update(b"\n");
            }
            hasher.update(line.as_bytes());
        }
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(&hasher.finalize());
        Fingerprint(bytes)
    }
}

impl fmt::Display for KeyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Fingerprint

/// A SHA-512 digest of a [`KeyTable`].
///
/// Displayed, parsed and serialized as 128 lowercase hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 64]);

impl Fingerprint {
    #[inline]
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Parses 128 hex digits, either case.
    pub fn from_hex(digits: &str) -> Result<Self, ContractError> {
        let mut bytes = [0u8; 64];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| ContractError::InvalidFingerprint(digits.to_owned()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}

impl FromStr for Fingerprint {
    type Err = ContractError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let digits = String::deserialize(deserializer)?;
        Self::from_hex(&digits).map_err(serde::de::Error::custom)
    }
}

// -----------------------------------------------------------------------------
// Validation

/// Renders and checks a [`Configuration`].
///
/// Callers store the approved [`Fingerprint`] (or the whole [`KeyTable`])
/// and [`verify`](Validation::verify) it on every build, so any change to
/// the contract is noticed before data is written with it.
#[derive(Debug, Clone, Copy)]
pub struct Validation<'c> {
    configuration: &'c Configuration,
}

impl<'c> Validation<'c> {
    #[inline]
    pub fn new(configuration: &'c Configuration) -> Self {
        Self { configuration }
    }

    #[inline]
    pub fn configuration(&self) -> &'c Configuration {
        self.configuration
    }

    pub fn key_table(&self) -> KeyTable {
        KeyTable::of(self.configuration)
    }

    #[inline]
    pub fn fingerprint(&self) -> Fingerprint {
        self.key_table().fingerprint()
    }

    /// Fails with [`ContractError::FingerprintMismatch`] unless the
    /// current fingerprint equals `expected`.
    pub fn verify(&self, expected: &Fingerprint) -> Result<(), ContractError> {
        let actual = self.fingerprint();
        if actual == *expected {
            return Ok(());
        }
        log::warn!("contract fingerprint changed to {actual}");
        Err(ContractError::FingerprintMismatch {
            expected: alloc::format!("{expected}"),
            actual: alloc::format!("{actual}"),
        })
    }
}

// -----------------------------------------------------------------------------
// Tests
