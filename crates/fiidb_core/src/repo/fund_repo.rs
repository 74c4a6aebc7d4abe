//! Fund detail repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the `(cnpj, acronym, trading_code)` projection of feed payloads.
//! - Resolve stored funds by acronym or trading code.
//!
//! # Invariants
//! - Every operation checks for an unset handle before any other work.
//! - Inserts skip any CNPJ already present, whether or not the table carries
//!   a unique constraint; existing rows are never updated and a duplicate is
//!   not an error.
//! - Code validation happens before a query is issued.
//! - `resolve_cnpj` maps a missing row to `""`; `get_fund_details` maps it to
//!   `RepoError::NotFound`.

use crate::db::{ensure_fund_details_schema, DbError, FUND_DETAILS_TABLE};
use crate::model::code::FundCode;
use crate::model::fund::{FundDetails, FundRecord};
use crate::model::FundValidationError;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error taxonomy for fund store operations.
#[derive(Debug)]
pub enum RepoError {
    /// No storage handle was injected.
    StoreUnset,
    /// Payload could not be decoded into `FundDetails`.
    Deserialization(serde_json::Error),
    Validation(FundValidationError),
    NotFound(FundCode),
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StoreUnset => write!(f, "database not set"),
            Self::Deserialization(err) => write!(f, "json unmarshal: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(code) => write!(f, "fund not found for {code}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StoreUnset => None,
            Self::Deserialization(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<FundValidationError> for RepoError {
    fn from(value: FundValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Deserialization(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for fund detail persistence and lookup.
pub trait FundRepository {
    /// Decodes `raw` and stores its CNPJ/acronym/trading-code triple.
    fn store_fund_details(&self, raw: &[u8]) -> RepoResult<()>;
    /// Returns the CNPJ for a 4-char acronym or 6-char trading code, or `""`.
    fn resolve_cnpj(&self, code: &str) -> RepoResult<String>;
    /// Returns a partial `FundDetails` with only the persisted fields set.
    fn get_fund_details(&self, code: &str) -> RepoResult<FundDetails>;
}

/// SQLite-backed fund detail store over a caller-owned connection.
///
/// A store built without a connection is valid: every operation returns
/// `RepoError::StoreUnset` without touching storage.
#[derive(Debug, Clone, Copy)]
pub struct FundDetailStore<'conn> {
    conn: Option<&'conn Connection>,
}

impl<'conn> FundDetailStore<'conn> {
    pub fn new(conn: Option<&'conn Connection>) -> Self {
        Self { conn }
    }

    /// Store with persistence disabled.
    pub fn unset() -> Self {
        Self { conn: None }
    }

    pub fn is_set(&self) -> bool {
        self.conn.is_some()
    }

    fn conn(&self) -> RepoResult<&'conn Connection> {
        self.conn.ok_or(RepoError::StoreUnset)
    }

    /// Creates `fii_details` if missing.
    pub fn ensure_schema(&self) -> RepoResult<()> {
        ensure_fund_details_schema(self.conn()?)?;
        Ok(())
    }

    /// Inserts an already-projected record.
    ///
    /// Returns `true` when a row was written and `false` when a row with the
    /// same CNPJ already existed.
    pub fn store_record(&self, record: &FundRecord) -> RepoResult<bool> {
        let conn = self.conn()?;
        ensure_fund_details_schema(conn)?;
        record.validate()?;
        insert_record(conn, record)
    }

    /// Looks up the stored triple for `code`.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no row matches.
    pub fn get_fund_record(&self, code: &str) -> RepoResult<FundRecord> {
        let conn = self.conn()?;
        let code = FundCode::parse(code)?;

        let sql = format!(
            "SELECT cnpj, acronym, trading_code FROM {FUND_DETAILS_TABLE} WHERE {} = ?1;",
            code.column()
        );
        let record = conn
            .query_row(&sql, [code.as_str()], |row| {
                Ok(FundRecord {
                    cnpj: row.get(0)?,
                    acronym: row.get(1)?,
                    trading_code: row.get(2)?,
                })
            })
            .optional()?;

        record.ok_or(RepoError::NotFound(code))
    }
}

impl FundRepository for FundDetailStore<'_> {
    fn store_fund_details(&self, raw: &[u8]) -> RepoResult<()> {
        let conn = self.conn()?;
        ensure_fund_details_schema(conn)?;

        let details = FundDetails::from_json(raw)?;
        let record = FundRecord::from_details(&details)?;
        insert_record(conn, &record)?;
        Ok(())
    }

    fn resolve_cnpj(&self, code: &str) -> RepoResult<String> {
        let conn = self.conn()?;
        let code = FundCode::parse(code)?;

        let sql = format!(
            "SELECT cnpj FROM {FUND_DETAILS_TABLE} WHERE {} = ?1;",
            code.column()
        );
        let cnpj = conn
            .query_row(&sql, [code.as_str()], |row| row.get::<_, String>(0))
            .optional()?;

        if cnpj.is_none() {
            debug!("event=fund_resolve module=repo status=miss kind={}", code.column());
        }
        Ok(cnpj.unwrap_or_default())
    }

    fn get_fund_details(&self, code: &str) -> RepoResult<FundDetails> {
        self.get_fund_record(code).map(FundDetails::from)
    }
}

fn insert_record(conn: &Connection, record: &FundRecord) -> RepoResult<bool> {
    // OR IGNORE covers two first-time writers racing past NOT EXISTS.
    let changed = conn.execute(
        &format!(
            "INSERT OR IGNORE INTO {FUND_DETAILS_TABLE} (cnpj, acronym, trading_code)
             SELECT ?1, ?2, ?3
             WHERE NOT EXISTS (SELECT 1 FROM {FUND_DETAILS_TABLE} WHERE cnpj = ?1);"
        ),
        params![
            record.cnpj.as_str(),
            record.acronym.as_str(),
            record.trading_code.as_str(),
        ],
    )?;

    let status = if changed == 0 { "ignored" } else { "inserted" };
    debug!("event=fund_store module=repo status={status}");
    Ok(changed > 0)
}
