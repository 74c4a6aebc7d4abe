//! Command-line front end over `fiidb_core`.
//!
//! # Responsibility
//! - Store feed payload files and run code lookups against a SQLite file.
//! - Keep output deterministic: one value per line, JSON for records.
//!
//! Exit codes: 0 on success, 1 on store/lookup failure, 2 on usage errors.

use fiidb_core::db::open_db;
use fiidb_core::{FundDetailStore, FundService, LoggingConfig};
use rusqlite::Connection;
use log::{error, info};
use std::error::Error;
use std::process::ExitCode;

const USAGE: &str = "usage:
  fiidb_cli ping
  fiidb_cli version
  fiidb_cli store <db_path> <json_file>
  fiidb_cli cnpj <db_path> <code>
  fiidb_cli details <db_path> <code>";

enum Command {
    Ping,
    Version,
    Store { db_path: String, json_file: String },
    Cnpj { db_path: String, code: String },
    Details { db_path: String, code: String },
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [cmd] if cmd == "ping" => Some(Command::Ping),
        [cmd] if cmd == "version" => Some(Command::Version),
        [cmd, db_path, json_file] if cmd == "store" => Some(Command::Store {
            db_path: db_path.clone(),
            json_file: json_file.clone(),
        }),
        [cmd, db_path, code] if cmd == "cnpj" => Some(Command::Cnpj {
            db_path: db_path.clone(),
            code: code.clone(),
        }),
        [cmd, db_path, code] if cmd == "details" => Some(Command::Details {
            db_path: db_path.clone(),
            code: code.clone(),
        }),
        _ => None,
    }
}

fn fund_service(conn: &Connection) -> FundService<FundDetailStore<'_>> {
    FundService::new(FundDetailStore::new(Some(conn)))
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Ping => println!("fiidb_core ping={}", fiidb_core::ping()),
        Command::Version => println!("fiidb_core version={}", fiidb_core::core_version()),
        Command::Store { db_path, json_file } => {
            let raw = std::fs::read(&json_file)?;
            let conn = open_db(&db_path)?;
            fund_service(&conn).ingest_payload(&raw)?;
            info!("event=cli_store module=cli status=ok");
        }
        Command::Cnpj { db_path, code } => {
            let conn = open_db(&db_path)?;
            let cnpj = fund_service(&conn).resolve_cnpj(&code)?;
            println!("{cnpj}");
        }
        Command::Details { db_path, code } => {
            let conn = open_db(&db_path)?;
            let details = fund_service(&conn).fund_details(&code)?;
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = LoggingConfig::from_env().apply() {
        eprintln!("logging disabled: {err}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{fund_service, parse_args, run, Command};
    use fiidb_core::db::open_db;
    use fiidb_core::RepoError;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_args_recognizes_lookup_commands() {
        assert!(matches!(
            parse_args(&args(&["cnpj", "fii.db", "ABCD"])),
            Some(Command::Cnpj { ref code, .. }) if code == "ABCD"
        ));
        assert!(matches!(
            parse_args(&args(&["details", "fii.db", "ABCD11"])),
            Some(Command::Details { ref db_path, .. }) if db_path == "fii.db"
        ));
        assert!(matches!(parse_args(&args(&["ping"])), Some(Command::Ping)));
    }

    #[test]
    fn parse_args_rejects_unknown_or_incomplete_commands() {
        assert!(parse_args(&args(&[])).is_none());
        assert!(parse_args(&args(&["store", "fii.db"])).is_none());
        assert!(parse_args(&args(&["drop", "fii.db", "ABCD"])).is_none());
    }

    #[test]
    fn store_command_goes_through_service_and_dedupes() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("fii.db").to_str().unwrap().to_string();
        let json_file = dir.path().join("fund.json");
        std::fs::write(
            &json_file,
            br#"{"detailFund": {"cnpj": " 1 ", "acronym": "ABCD", "tradingCode": "ABCD11"}}"#,
        )
        .unwrap();
        let json_file = json_file.to_str().unwrap().to_string();

        for _ in 0..2 {
            run(Command::Store {
                db_path: db_path.clone(),
                json_file: json_file.clone(),
            })
            .unwrap();
        }
        run(Command::Cnpj {
            db_path: db_path.clone(),
            code: "ABCD".to_string(),
        })
        .unwrap();

        let conn = open_db(&db_path).unwrap();
        let service = fund_service(&conn);
        assert_eq!(service.resolve_cnpj("ABCD11").unwrap(), "1");
        assert_eq!(service.fund_details("ABCD").unwrap().detail_fund.cnpj, "1");
        assert!(matches!(
            service.fund_details("WXYZ11"),
            Err(RepoError::NotFound(_))
        ));
    }

    #[test]
    fn details_command_reports_unknown_code() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("fii.db").to_str().unwrap().to_string();
        open_db(&db_path)
            .unwrap()
            .execute_batch("CREATE TABLE fii_details (cnpj TEXT, acronym TEXT, trading_code TEXT);")
            .unwrap();

        let err = run(Command::Details {
            db_path,
            code: "WXYZ11".to_string(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("fund not found"));
    }
}
