//! Party-wise receivables and payables rollups.
//!
//! "Overdue" in this module trusts the stored document status. Ageing
//! (`crate::ageing`) derives it from due dates instead; the two can
//! disagree when statuses are stale, and rows expose both.

pub mod service;
pub mod sort;
pub mod types;


pub use service::{RollupService, RowOptions};
pub use sort::{RollupSortKey, SortDirection, sort_rows};
pub use types::{PartyBalance, PartyRow};
