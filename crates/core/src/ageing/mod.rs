//! Ageing of open balances.
//!
//! This module provides:
//! - Overdue-day calculation shared by buckets and badges
//! - The four-bucket ageing classification (current, 1-30, 31-60, 60+)
//!
//! "Overdue" here is always derived from the due date. The stored status is
//! never consulted (compare `rollup`, which is status-based).

pub mod days;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use days::{days_overdue, days_overdue_opt};
pub use service::AgeingService;
pub use types::{AgeingBucket, AgeingItem, AgeingSummary, BucketCounts};
