//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the fund store data access contract.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`StoreUnset`, `NotFound`,
//!   validation) in addition to DB transport errors.

pub mod fund_repo;
