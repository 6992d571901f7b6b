//! Dashboard data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ageing::AgeingSummary;
use crate::domain::Transaction;
use crate::limits::LimitUtilization;

/// Dashboard summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Reference date.
    pub as_of: NaiveDate,
    /// Receivables ageing.
    pub receivables: AgeingSummary,
    /// Payables ageing.
    pub payables: AgeingSummary,
    /// BNPL limits with utilization.
    pub limits: Vec<LimitUtilization>,
    /// Most recent documents, newest first.
    pub recent_transactions: Vec<Transaction>,
    /// Records waiting to be pushed to Tally, when the API reports it.
    pub pending_sync_count: Option<u64>,
}

impl DashboardSummary {
    /// Total owed to us.
    #[must_use]
    pub fn total_receivable(&self) -> Decimal {
        self.receivables.total()
    }

    /// Total owed by us.
    #[must_use]
    pub fn total_payable(&self) -> Decimal {
        self.payables.total()
    }

    /// Receivable documents past their due date, when counts are known.
    #[must_use]
    pub fn overdue_receivable_count(&self) -> Option<usize> {
        self.receivables.overdue_count()
    }

    /// Payable documents past their due date, when counts are known.
    #[must_use]
    pub fn overdue_payable_count(&self) -> Option<usize> {
        self.payables.overdue_count()
    }

    /// Receivables minus payables.
    #[must_use]
    pub fn net_position(&self) -> Decimal {
        self.total_receivable().saturating_sub(self.total_payable())
    }
}

/// Knobs for building a summary.
#[derive(Debug, Clone, Copy)]
pub struct DashboardOptions {
    /// Number of recent documents to keep.
    pub recent_limit: usize,
    /// Expiry warning window in days.
    pub expiry_warning_days: i64,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            recent_limit: 5,
            expiry_warning_days: 30,
        }
    }
}
