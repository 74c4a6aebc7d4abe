//! Fund domain model.
//!
//! # Responsibility
//! - Describe the external fund-detail payload accepted from upstream feeds.
//! - Define the persisted projection and the lookup key types.
//!
//! # Invariants
//! - Only `FundRecord` fields are load-bearing for storage; every other
//!   payload field is parsed and dropped.

pub mod code;
pub mod fund;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failures raised before any SQL is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FundValidationError {
    /// CNPJ is empty after trimming. Carries the trimmed value.
    InvalidCnpj(String),
    /// Lookup code is neither 4 (acronym) nor 6 (trading code) characters.
    InvalidCode(String),
}

impl Display for FundValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCnpj(value) => write!(f, "wrong CNPJ: `{value}`"),
            Self::InvalidCode(code) => write!(f, "invalid code `{code}`"),
        }
    }
}

impl Error for FundValidationError {}
