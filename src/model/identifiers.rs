//! Identifier newtypes with smart constructors.
//!
//! Identifiers arrive from the remote sheet as either strings or numbers and
//! are normalized to trimmed, non-empty strings at construction time.

use std::fmt;
use thiserror::Error;

/// Unique identifier of a single aid record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AidId(String);

impl AidId {
    /// Smart constructor: trims and rejects empty ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        normalize(raw.into(), "aid id").map(Self)
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// National id of the beneficiary an aid record is issued to.
///
/// Several records may share one beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeneficiaryId(String);

impl BeneficiaryId {
    /// Smart constructor: trims and rejects empty ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        normalize(raw.into(), "beneficiary id").map(Self)
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BeneficiaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejected identifier input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} must not be empty")]
pub struct InvalidIdentifier {
    /// Which identifier was being constructed.
    pub kind: &'static str,
}

fn normalize(raw: String, kind: &'static str) -> Result<String, InvalidIdentifier> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidIdentifier { kind });
    }
    if trimmed.len() == raw.len() {
        Ok(raw)
    } else {
        Ok(trimmed.to_string())
    }
}
