//! Fund detail payload and its persisted projection.
//!
//! # Responsibility
//! - Mirror the upstream JSON shape (`detailFund` + `shareHolder`).
//! - Project a payload down to the `(cnpj, acronym, trading_code)` triple.
//!
//! # Invariants
//! - Missing or `null` payload fields decode to their empty value.
//! - A `FundRecord` always has a non-empty, trimmed CNPJ.

use super::FundValidationError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Full fund-detail record as published by the upstream feed.
///
/// Identity field: `detail_fund.cnpj`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FundDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub detail_fund: DetailFund,
    #[serde(deserialize_with = "null_as_default")]
    pub share_holder: ShareHolder,
}

/// Fund identification, manager and quota data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetailFund {
    #[serde(deserialize_with = "null_as_default")]
    pub acronym: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trading_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trading_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trading_code_others: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cnpj: String,
    #[serde(deserialize_with = "null_as_default")]
    pub classification: String,
    #[serde(deserialize_with = "null_as_default")]
    pub web_site: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fund_address: String,
    #[serde(rename = "fundPhoneNumberDDD", deserialize_with = "null_as_default")]
    pub fund_phone_number_ddd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fund_phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fund_phone_number_fax: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position_manager: String,
    #[serde(deserialize_with = "null_as_default")]
    pub manager_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_address: String,
    #[serde(rename = "companyPhoneNumberDDD", deserialize_with = "null_as_default")]
    pub company_phone_number_ddd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_phone_number_fax: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quota_count: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quota_date_approved: String,
    /// Secondary listing codes.
    #[serde(deserialize_with = "null_as_default")]
    pub codes: Vec<String>,
    /// Shape varies across feed versions; kept opaque.
    pub codes_other: Value,
    /// Shape varies across feed versions; kept opaque.
    pub segment: Value,
}

/// Shareholder-service contact block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareHolder {
    #[serde(deserialize_with = "null_as_default")]
    pub share_holder_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub share_holder_address: String,
    #[serde(
        rename = "shareHolderPhoneNumberDDD",
        deserialize_with = "null_as_default"
    )]
    pub share_holder_phone_number_ddd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub share_holder_phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub share_holder_fax_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub share_holder_email: String,
}

impl FundDetails {
    /// Decodes a raw feed payload.
    pub fn from_json(raw: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(raw)
    }
}

/// Persisted subset of `FundDetails`: one row of `fii_details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundRecord {
    pub cnpj: String,
    pub acronym: String,
    pub trading_code: String,
}

impl FundRecord {
    /// Builds a record from raw field values, trimming surrounding whitespace.
    ///
    /// # Errors
    /// - `FundValidationError::InvalidCnpj` when the trimmed CNPJ is empty.
    pub fn new(
        cnpj: impl AsRef<str>,
        acronym: impl AsRef<str>,
        trading_code: impl AsRef<str>,
    ) -> Result<Self, FundValidationError> {
        let record = Self {
            cnpj: cnpj.as_ref().trim().to_string(),
            acronym: acronym.as_ref().trim().to_string(),
            trading_code: trading_code.as_ref().trim().to_string(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Projects a full payload down to its persisted fields.
    pub fn from_details(details: &FundDetails) -> Result<Self, FundValidationError> {
        let fund = &details.detail_fund;
        Self::new(&fund.cnpj, &fund.acronym, &fund.trading_code)
    }

    pub fn validate(&self) -> Result<(), FundValidationError> {
        if self.cnpj.trim().is_empty() {
            return Err(FundValidationError::InvalidCnpj(self.cnpj.clone()));
        }
        Ok(())
    }
}

/// Partial `FundDetails`: only the three persisted fields are populated.
impl From<FundRecord> for FundDetails {
    fn from(record: FundRecord) -> Self {
        Self {
            detail_fund: DetailFund {
                cnpj: record.cnpj,
                acronym: record.acronym,
                trading_code: record.trading_code,
                ..DetailFund::default()
            },
            share_holder: ShareHolder::default(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
