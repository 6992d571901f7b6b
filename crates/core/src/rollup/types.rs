//! Rollup data types.

use chrono::NaiveDate;
use ledgerdesk_shared::types::PartyId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ageing::days_overdue_opt;

/// Per-party aggregate of open documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyBalance {
    /// Sum of outstanding balances.
    pub total: Decimal,
    /// Part of `total` from documents whose stored status is `overdue`.
    pub overdue: Decimal,
    /// Number of contributing documents.
    pub count: usize,
}

/// One line of the receivables or payables table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyRow {
    /// Party.
    pub party_id: PartyId,
    /// Party display name.
    pub party_name: String,
    /// Outstanding total.
    pub total_due: Decimal,
    /// Status-based overdue amount.
    pub overdue_amount: Decimal,
    /// Number of open documents.
    pub invoice_count: usize,
    /// Latest receipt (receivables) or payment (payables) date.
    pub last_payment_date: Option<NaiveDate>,
    /// Earliest due date among open documents.
    pub oldest_due_date: Option<NaiveDate>,
    /// Mean age in days of open documents.
    pub avg_collection_days: Option<Decimal>,
}

impl PartyRow {
    /// Date-based days overdue of the oldest open document.
    ///
    /// Can be positive while `overdue_amount` is zero when stored statuses
    /// lag behind due dates.
    #[must_use]
    pub fn days_overdue(&self, as_of: NaiveDate) -> i64 {
        days_overdue_opt(self.oldest_due_date, as_of)
    }
}
