//! SQLite storage bootstrap and schema entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the fund store.
//! - Own the DDL for the `fii_details` table.
//!
//! # Invariants
//! - Opening a connection never creates application tables; schema creation
//!   is lazy and happens on first write through the store.
//! - Every schema statement is idempotent (`IF NOT EXISTS`).

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::{ensure_fund_details_schema, table_exists, FUND_DETAILS_TABLE};

pub type DbResult<T> = Result<T, DbError>;

/// Storage-engine failure, passed through from SQLite unchanged.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
