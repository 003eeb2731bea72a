//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers of the chamber registry. You cannot
//! pass an author's `Dni` where a proposition's `LawCode` is expected, and
//! neither can be built from an invalid string.
//!
//! Both newtypes deserialize through their validating constructors, so a
//! persisted proposition with a blank code is rejected on load.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::kind::PropositionKind;
use crate::validate::{require_non_empty, require_valid_author_id};

/// The code identifying a proposition (e.g. `"PL 1/2016"`).
///
/// Never empty. Two propositions are the same proposition iff their
/// codes are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LawCode(String);

/// Author identifier (DNI) in `NNNNNNNNN-N` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dni(String);

impl LawCode {
    /// Wrap a code, rejecting empty or whitespace-only input.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        require_non_empty(&code, "codigo de lei nao pode ser vazio ou nulo")?;
        Ok(Self(code))
    }

    /// The conventional registry code `"<KIND> <number>/<year>"`.
    ///
    /// The registry numbers propositions per kind and year, starting at 1.
    pub fn numbered(kind: PropositionKind, number: u32, year: i32) -> Self {
        Self(format!("{} {}/{}", kind.code(), number, year))
    }

    /// Borrow the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Dni {
    /// Wrap an author identifier, rejecting anything not in `NNNNNNNNN-N` form.
    pub fn new(dni: impl Into<String>) -> Result<Self, ValidationError> {
        let dni = dni.into();
        require_valid_author_id(&dni, "")?;
        Ok(Self(dni))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LawCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LawCode> for String {
    fn from(code: LawCode) -> Self {
        code.0
    }
}

impl TryFrom<String> for Dni {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Dni> for String {
    fn from(dni: Dni) -> Self {
        dni.0
    }
}

impl std::fmt::Display for LawCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Dni {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
