//! Short exchange codes used as lookup keys.

use super::FundValidationError;
use std::fmt::{Display, Formatter};

const ACRONYM_LEN: usize = 4;
const TRADING_CODE_LEN: usize = 6;

/// Lookup key for a stored fund, discriminated by code length.
///
/// `"ABCD"` is an exchange acronym, `"ABCD11"` a trading code. No other
/// format checks are applied; the code is matched verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FundCode {
    Acronym(String),
    TradingCode(String),
}

impl FundCode {
    /// Classifies `code` by its character count.
    ///
    /// # Errors
    /// - `FundValidationError::InvalidCode` for any length other than 4 or 6.
    pub fn parse(code: &str) -> Result<Self, FundValidationError> {
        match code.chars().count() {
            ACRONYM_LEN => Ok(Self::Acronym(code.to_string())),
            TRADING_CODE_LEN => Ok(Self::TradingCode(code.to_string())),
            _ => Err(FundValidationError::InvalidCode(code.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Acronym(code) | Self::TradingCode(code) => code.as_str(),
        }
    }

    /// Column of `fii_details` this code is matched against.
    pub(crate) fn column(&self) -> &'static str {
        match self {
            Self::Acronym(_) => "acronym",
            Self::TradingCode(_) => "trading_code",
        }
    }
}

impl Display for FundCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Acronym(code) => write!(f, "acronym `{code}`"),
            Self::TradingCode(code) => write!(f, "trading code `{code}`"),
        }
    }
}
