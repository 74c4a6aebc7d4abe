//! DDL for fund detail storage.
//!
//! # Invariants
//! - Tables created here declare `cnpj` as `UNIQUE`.
//! - Pre-existing tables are never altered: they may hold duplicate CNPJs
//!   written by older producers, so dedupe lives in the insert statement.
//! - All statements can run concurrently from several first-time callers.

use super::DbResult;
use rusqlite::Connection;

/// Name of the table holding one row per fund.
pub const FUND_DETAILS_TABLE: &str = "fii_details";

/// Creates the `fii_details` table and its lookup indexes when missing.
pub fn ensure_fund_details_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {FUND_DETAILS_TABLE} (
            cnpj TEXT NOT NULL UNIQUE,
            acronym TEXT NOT NULL DEFAULT '',
            trading_code TEXT NOT NULL DEFAULT ''
        );
        CREATE INDEX IF NOT EXISTS idx_{FUND_DETAILS_TABLE}_acronym
            ON {FUND_DETAILS_TABLE} (acronym);
        CREATE INDEX IF NOT EXISTS idx_{FUND_DETAILS_TABLE}_trading_code
            ON {FUND_DETAILS_TABLE} (trading_code);"
    ))?;
    Ok(())
}

/// Returns whether a table with the given name exists.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{ensure_fund_details_schema, table_exists, FUND_DETAILS_TABLE};
    use rusqlite::Connection;

    const LEGACY_DDL: &str = "CREATE TABLE fii_details (cnpj TEXT, acronym TEXT, trading_code TEXT);
        INSERT INTO fii_details VALUES ('1', 'ABCD', 'ABCD11');
        INSERT INTO fii_details VALUES ('1', 'ABCD', 'ABCD11');";

    #[test]
    fn ensure_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn, FUND_DETAILS_TABLE).unwrap());

        ensure_fund_details_schema(&conn).unwrap();
        ensure_fund_details_schema(&conn).unwrap();

        assert!(table_exists(&conn, FUND_DETAILS_TABLE).unwrap());
    }

    #[test]
    fn new_table_rejects_duplicate_cnpj() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_fund_details_schema(&conn).unwrap();

        conn.execute("INSERT INTO fii_details (cnpj) VALUES ('1');", [])
            .unwrap();
        let duplicate = conn.execute("INSERT INTO fii_details (cnpj) VALUES ('1');", []);
        assert!(duplicate.is_err());
    }

    #[test]
    fn ensure_schema_leaves_legacy_duplicates_alone() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(LEGACY_DDL).unwrap();

        ensure_fund_details_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM fii_details;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }
}
