use fiidb_core::db::{open_db, table_exists, FUND_DETAILS_TABLE};
use fiidb_core::{FundDetailStore, FundRepository};
use rusqlite::Connection;

const LEGACY_DDL: &str = "CREATE TABLE fii_details (cnpj TEXT, acronym TEXT, trading_code TEXT);";

const MXRF_PAYLOAD: &[u8] =
    br#"{"detailFund": {"cnpj": "97.521.225/0001-25", "acronym": "MXRF", "tradingCode": "MXRF11"}}"#;

#[test]
fn open_db_does_not_create_fund_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fii.db");

    let conn = open_db(&path).unwrap();
    assert!(!table_exists(&conn, FUND_DETAILS_TABLE).unwrap());
}

#[test]
fn stored_funds_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fii.db");

    let conn = open_db(&path).unwrap();
    FundDetailStore::new(Some(&conn))
        .store_fund_details(MXRF_PAYLOAD)
        .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    let store = FundDetailStore::new(Some(&conn));
    assert_eq!(store.resolve_cnpj("MXRF11").unwrap(), "97.521.225/0001-25");
}

#[test]
fn legacy_table_without_unique_constraint_still_ignores_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = open_db(&path).unwrap();
    conn.execute_batch(LEGACY_DDL).unwrap();

    let store = FundDetailStore::new(Some(&conn));
    let raw = br#"{"detailFund": {"cnpj": "2", "acronym": "ABCD", "tradingCode": "ABCD11"}}"#;
    store.store_fund_details(raw).unwrap();
    store.store_fund_details(raw).unwrap();

    assert_eq!(cnpj_count(&conn, "2"), 1);
}

#[test]
fn legacy_table_with_duplicate_cnpjs_accepts_new_funds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = open_db(&path).unwrap();
    conn.execute_batch(LEGACY_DDL).unwrap();
    conn.execute_batch(
        "INSERT INTO fii_details VALUES ('1', 'WXYZ', 'WXYZ11');
         INSERT INTO fii_details VALUES ('1', 'WXYZ', 'WXYZ11');",
    )
    .unwrap();

    let store = FundDetailStore::new(Some(&conn));
    store
        .store_fund_details(br#"{"detailFund": {"cnpj": "2", "acronym": "MXRF"}}"#)
        .unwrap();
    store
        .store_fund_details(br#"{"detailFund": {"cnpj": "1", "acronym": "HGLG"}}"#)
        .unwrap();

    assert_eq!(cnpj_count(&conn, "1"), 2);
    assert_eq!(cnpj_count(&conn, "2"), 1);
    assert_eq!(store.resolve_cnpj("MXRF").unwrap(), "2");
    assert_eq!(store.resolve_cnpj("HGLG").unwrap(), "");
}

fn cnpj_count(conn: &Connection, cnpj: &str) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM fii_details WHERE cnpj = ?1;",
        [cnpj],
        |row| row.get(0),
    )
    .unwrap()
}
