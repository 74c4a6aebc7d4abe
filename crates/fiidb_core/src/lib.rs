//! Core persistence for FII (Brazilian real-estate fund) details.
//! Stores the CNPJ/acronym/trading-code projection of feed payloads and
//! resolves funds by short exchange code.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::code::FundCode;
pub use model::fund::{DetailFund, FundDetails, FundRecord, ShareHolder};
pub use model::FundValidationError;
pub use repo::fund_repo::{FundDetailStore, FundRepository, RepoError, RepoResult};
pub use service::fund_service::FundService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
