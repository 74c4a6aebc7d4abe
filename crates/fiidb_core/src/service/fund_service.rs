//! Fund detail use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for feed ingestion and code lookups.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::fund::FundDetails;
use crate::repo::fund_repo::{FundRepository, RepoResult};

/// Use-case service wrapper for fund detail operations.
pub struct FundService<R: FundRepository> {
    repo: R,
}

impl<R: FundRepository> FundService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores one raw feed payload.
    ///
    /// A payload whose CNPJ is already stored succeeds without changes.
    pub fn ingest_payload(&self, raw: &[u8]) -> RepoResult<()> {
        self.repo.store_fund_details(raw)
    }

    /// Resolves a CNPJ from an acronym or trading code.
    ///
    /// Returns an empty string when no fund matches.
    pub fn resolve_cnpj(&self, code: &str) -> RepoResult<String> {
        self.repo.resolve_cnpj(code)
    }

    /// Gets the partial fund details stored for a code.
    pub fn fund_details(&self, code: &str) -> RepoResult<FundDetails> {
        self.repo.get_fund_details(code)
    }
}
