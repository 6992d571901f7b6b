//! Dashboard summary over a snapshot.

use std::cmp::Reverse;

use super::types::{DashboardOptions, DashboardSummary};
use crate::domain::{LedgerSide, Transaction};
use crate::snapshot::LedgerSnapshot;

/// Service for building the dashboard.
pub struct DashboardService;

impl DashboardService {
    /// Builds the dashboard from a snapshot.
    ///
    /// `pending_sync_count` is left empty: only the API knows it.
    #[must_use]
    pub fn summarize(snapshot: &LedgerSnapshot, options: DashboardOptions) -> DashboardSummary {
        DashboardSummary {
            as_of: snapshot.as_of,
            receivables: snapshot.ageing(LedgerSide::Receivable),
            payables: snapshot.ageing(LedgerSide::Payable),
            limits: snapshot.limit_utilizations(options.expiry_warning_days),
            recent_transactions: Self::recent(&snapshot.transactions, options.recent_limit),
            pending_sync_count: None,
        }
    }

    /// The `limit` newest documents by date; ties go to the higher ID.
    #[must_use]
    pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by_key(|t| Reverse((t.transaction_date, t.id)));
        sorted.into_iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PartyType, TransactionStatus};
    use crate::fixtures::{bill, days_ago, days_ahead, invoice, limit, party, today};
    use crate::limits::ExpiryStatus;
    use rust_decimal_macros::dec;

    fn snapshot() -> LedgerSnapshot {
        let mut old = invoice(1, 1, dec!(4000), TransactionStatus::Overdue);
        old.transaction_date = days_ago(90);
        old.due_date = Some(days_ago(75));

        let mut fresh = invoice(2, 1, dec!(1200), TransactionStatus::Pending);
        fresh.transaction_date = days_ago(2);
        fresh.due_date = Some(days_ahead(28));

        let mut same_day = bill(3, 2, dec!(2500), TransactionStatus::Pending);
        same_day.transaction_date = days_ago(2);
        same_day.due_date = Some(days_ago(1));

        let mut expiring = limit(1, 2, dec!(200000), dec!(50000));
        expiring.expiry_date = Some(days_ahead(10));

        LedgerSnapshot::new(
            today(),
            vec![old, fresh, same_day],
            vec![
                party(1, "Apex Stores", PartyType::Customer),
                party(2, "Bharat Steel", PartyType::Vendor),
            ],
            vec![expiring],
        )
    }

    #[test]
    fn test_summarize() {
        let summary = DashboardService::summarize(&snapshot(), DashboardOptions::default());

        assert_eq!(summary.as_of, today());
        assert_eq!(summary.total_receivable(), dec!(5200));
        assert_eq!(summary.total_payable(), dec!(2500));
        assert_eq!(summary.net_position(), dec!(2700));
        assert_eq!(summary.receivables.days_60_plus, dec!(4000));
        assert_eq!(summary.overdue_receivable_count(), Some(1));
        assert_eq!(summary.overdue_payable_count(), Some(1));
        assert_eq!(summary.payables.days_1_to_30, dec!(2500));
        assert_eq!(summary.limits[0].utilization_percent, dec!(25));
        assert_eq!(summary.limits[0].expiry_status, ExpiryStatus::ExpiringSoon);
        assert_eq!(summary.pending_sync_count, None);
    }

    #[test]
    fn test_recent_orders_by_date_then_id() {
        let summary = DashboardService::summarize(
            &snapshot(),
            DashboardOptions {
                recent_limit: 2,
                ..DashboardOptions::default()
            },
        );
        let ids: Vec<_> = summary
            .recent_transactions
            .iter()
            .map(|t| t.id.into_inner())
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_recent_with_limit_above_len() {
        assert_eq!(DashboardService::recent(&snapshot().transactions, 50).len(), 3);
        assert!(DashboardService::recent(&[], 5).is_empty());
    }
}
