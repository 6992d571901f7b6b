//! Core business logic for Ledgerdesk.
//!
//! This crate contains pure computations with ZERO web or I/O dependencies.
//! Every view is derived from an immutable [`LedgerSnapshot`] of records
//! fetched from the accounting API.
//!
//! # Modules
//!
//! - `domain` - Transactions, parties and BNPL limits
//! - `validation` - Boundary parsing and invariant checks
//! - `ageing` - Overdue-day calculation and ageing buckets
//! - `rollup` - Party-wise receivables/payables aggregation and sorting
//! - `limits` - BNPL/credit limit utilization and expiry
//! - `dashboard` - Dashboard summary over a snapshot
//! - `format` - Currency, date and percentage display strings

pub mod ageing;
pub mod dashboard;
pub mod domain;
pub mod format;
pub mod limits;
pub mod rollup;
pub mod snapshot;
pub mod validation;

#[cfg(test)]
mod fixtures;

pub use snapshot::LedgerSnapshot;
pub use validation::{ValidationError, ValidationMode};
