//! Plain-text tables for terminal output.

use chrono::NaiveDate;
use ledgerdesk_client::SyncOutcome;
use ledgerdesk_core::ageing::{AgeingBucket, AgeingSummary};
use ledgerdesk_core::dashboard::DashboardSummary;
use ledgerdesk_core::format::{
    MISSING, format_currency, format_date, format_days, format_percent, percent_shares,
};
use ledgerdesk_core::limits::LimitUtilization;
use ledgerdesk_core::rollup::PartyRow;
use ledgerdesk_shared::types::{Currency, PartyId};
use rust_decimal::Decimal;

/// Column alignment.
#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

struct Table {
    columns: Vec<(&'static str, Align)>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(columns: Vec<(&'static str, Align)>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn render(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, (header, _))| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or_default()
            })
            .collect();

        let mut out = vec![self.line(&widths, self.columns.iter().map(|(h, _)| *h))];
        out.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        for row in &self.rows {
            out.push(self.line(&widths, row.iter().map(String::as_str)));
        }
        out.join("\n")
    }

    fn line<'a>(&self, widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
        cells
            .zip(self.columns.iter().zip(widths))
            .map(|(cell, ((_, align), width))| match align {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }
}

/// Party-wise receivables or payables.
pub fn party_table(rows: &[PartyRow], as_of: NaiveDate, currency: Currency) -> String {
    if rows.is_empty() {
        return "No outstanding balances.".to_string();
    }

    let mut table = Table::new(vec![
        ("Party", Align::Left),
        ("Total due", Align::Right),
        ("Overdue", Align::Right),
        ("Docs", Align::Right),
        ("Days overdue", Align::Right),
        ("Oldest due", Align::Left),
        ("Last payment", Align::Left),
        ("Avg collection", Align::Right),
    ]);
    for row in rows {
        let days = row.days_overdue(as_of);
        table.push(vec![
            row.party_name.clone(),
            format_currency(row.total_due, currency),
            format_currency(row.overdue_amount, currency),
            row.invoice_count.to_string(),
            if days > 0 { days.to_string() } else { MISSING.to_string() },
            format_date(row.oldest_due_date),
            format_date(row.last_payment_date),
            format_days(row.avg_collection_days),
        ]);
    }

    let total: Decimal = rows.iter().map(|r| r.total_due).sum();
    let overdue: Decimal = rows.iter().map(|r| r.overdue_amount).sum();
    format!(
        "{}\n\nTotal {} across {} parties, {} overdue",
        table.render(),
        format_currency(total, currency),
        rows.len(),
        format_currency(overdue, currency),
    )
}

/// Ageing buckets with amounts, counts and share of the total.
pub fn ageing_table(title: &str, summary: &AgeingSummary, currency: Currency) -> String {
    let total = summary.total();
    let shares = percent_shares(&AgeingBucket::ALL.map(|b| summary.amount(b)));
    let mut table = Table::new(vec![
        ("Bucket", Align::Left),
        ("Amount", Align::Right),
        ("Docs", Align::Right),
        ("Share", Align::Right),
    ]);
    for (i, bucket) in AgeingBucket::ALL.into_iter().enumerate() {
        table.push(vec![
            bucket.label().to_string(),
            format_currency(summary.amount(bucket), currency),
            count_cell(summary.count(bucket)),
            shares
                .as_ref()
                .map_or_else(|| MISSING.to_string(), |s| format_percent(s[i])),
        ]);
    }
    format!(
        "{title}\n{}\n\nTotal {}, overdue {}",
        table.render(),
        format_currency(total, currency),
        format_currency(summary.overdue(), currency),
    )
}

/// BNPL limits with utilization and expiry badges.
pub fn limits_table(
    limits: &[LimitUtilization],
    party_name: impl Fn(PartyId) -> String,
    currency: Currency,
) -> String {
    if limits.is_empty() {
        return "No BNPL limits configured.".to_string();
    }

    let mut table = Table::new(vec![
        ("Party", Align::Left),
        ("Type", Align::Left),
        ("Limit", Align::Right),
        ("Used", Align::Right),
        ("Available", Align::Right),
        ("Used %", Align::Right),
        ("Expiry", Align::Left),
        ("Status", Align::Left),
    ]);
    for limit in limits {
        let mut status = limit.expiry_status.label().to_string();
        if limit.is_over_limit() {
            status.push_str(", over limit");
        }
        table.push(vec![
            party_name(limit.party_id),
            limit.limit_type.as_str().to_string(),
            format_currency(limit.total_limit, currency),
            format_currency(limit.used_limit, currency),
            format_currency(limit.available, currency),
            format_percent(limit.utilization_percent),
            format_date(limit.expiry_date),
            status,
        ]);
    }
    table.render()
}

fn count_cell(count: Option<usize>) -> String {
    count.map_or_else(|| MISSING.to_string(), |n| n.to_string())
}

/// Dashboard overview.
pub fn dashboard(
    summary: &DashboardSummary,
    party_name: impl Fn(PartyId) -> String,
    currency: Currency,
) -> String {
    let mut sections = vec![
        format!("Dashboard as of {}", format_date(Some(summary.as_of))),
        format!(
            "Receivable {}  Payable {}  Net {}",
            format_currency(summary.total_receivable(), currency),
            format_currency(summary.total_payable(), currency),
            format_currency(summary.net_position(), currency),
        ),
        format!(
            "Overdue documents: {} receivable, {} payable",
            count_cell(summary.overdue_receivable_count()),
            count_cell(summary.overdue_payable_count()),
        ),
        ageing_table("Receivables ageing", &summary.receivables, currency),
        ageing_table("Payables ageing", &summary.payables, currency),
        limits_table(&summary.limits, party_name, currency),
    ];

    if !summary.recent_transactions.is_empty() {
        let mut recent = Table::new(vec![
            ("Date", Align::Left),
            ("Number", Align::Left),
            ("Type", Align::Left),
            ("Amount", Align::Right),
            ("Status", Align::Left),
        ]);
        for txn in &summary.recent_transactions {
            recent.push(vec![
                format_date(Some(txn.transaction_date)),
                txn.transaction_number.clone(),
                txn.transaction_type.as_str().to_string(),
                format_currency(txn.amount, currency),
                txn.status.as_str().to_string(),
            ]);
        }
        sections.push(format!("Recent transactions\n{}", recent.render()));
    }

    if let Some(pending) = summary.pending_sync_count {
        sections.push(format!("Pending Tally sync: {pending} records"));
    }
    sections.join("\n\n")
}

/// One-line Tally sync result.
pub fn sync_outcome(outcome: &SyncOutcome) -> String {
    let records = outcome
        .records_synced
        .map(|n| format!(" ({n} records)"))
        .unwrap_or_default();
    let state = if outcome.success { "succeeded" } else { "failed" };
    format!("Tally sync {state}{records}: {}", outcome.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerdesk_core::domain::LimitType;
    use ledgerdesk_core::limits::ExpiryStatus;
    use ledgerdesk_shared::types::LimitId;
    use rust_decimal_macros::dec;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn row(id: i64, name: &str) -> PartyRow {
        PartyRow {
            party_id: PartyId::new(id),
            party_name: name.to_string(),
            total_due: dec!(150000),
            overdue_amount: dec!(50000),
            invoice_count: 3,
            last_payment_date: None,
            oldest_due_date: NaiveDate::from_ymd_opt(2026, 10, 4),
            avg_collection_days: Some(dec!(22.50)),
        }
    }

    #[test]
    fn test_party_table() {
        let out = party_table(&[row(1, "Apex Stores")], as_of(), Currency::Inr);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("Party"));
        assert!(lines[2].contains("₹1,50,000.00"));
        assert!(lines[2].contains("04 Oct 2026"));
        assert!(lines[2].contains("22.5 days"));
        assert!(lines[2].contains(" 10 "));
        assert!(out.ends_with("Total ₹1,50,000.00 across 1 parties, ₹50,000.00 overdue"));
    }

    #[test]
    fn test_columns_align() {
        let out = party_table(
            &[row(1, "Apex Stores"), row(2, "B")],
            as_of(),
            Currency::Inr,
        );
        let lines: Vec<&str> = out.lines().take(4).collect();
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert_eq!(widths[1], widths[2]);
        assert_eq!(widths[2], widths[3]);
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(party_table(&[], as_of(), Currency::Inr), "No outstanding balances.");
        assert_eq!(
            limits_table(&[], |_| String::new(), Currency::Inr),
            "No BNPL limits configured."
        );
    }

    #[test]
    fn test_ageing_table_shares() {
        let summary = AgeingSummary::from_amounts(dec!(1000), dec!(2000), dec!(1500), dec!(3000));
        let out = ageing_table("Receivables ageing", &summary, Currency::Inr);

        assert!(out.starts_with("Receivables ageing\n"));
        assert!(out.contains("40%"));
        assert!(out.contains("27%"));
        assert!(out.contains("Total ₹7,500.00, overdue ₹6,500.00"));
    }

    #[test]
    fn test_ageing_table_without_balances() {
        let out = ageing_table("Payables ageing", &AgeingSummary::default(), Currency::Inr);
        let current: Vec<&str> = out
            .lines()
            .find(|l| l.starts_with("Current"))
            .unwrap()
            .split_whitespace()
            .collect();
        assert_eq!(current, vec!["Current", "₹0.00", "0", "-"]);
    }

    fn dashboard_summary(receivables: AgeingSummary) -> DashboardSummary {
        DashboardSummary {
            as_of: as_of(),
            receivables,
            payables: AgeingSummary::default(),
            limits: vec![LimitUtilization {
                limit_id: LimitId::new(1),
                party_id: PartyId::new(3),
                limit_type: LimitType::Sales,
                total_limit: dec!(250000),
                used_limit: dec!(150000),
                available: dec!(100000),
                utilization_percent: dec!(60),
                expiry_date: None,
                days_until_expiry: None,
                expiry_status: ExpiryStatus::NoExpiry,
            }],
            recent_transactions: Vec::new(),
            pending_sync_count: Some(4),
        }
    }

    #[test]
    fn test_dashboard_with_amounts_only() {
        let summary = dashboard_summary(AgeingSummary::from_amounts(
            dec!(1000),
            dec!(2000),
            dec!(1500),
            dec!(3000),
        ));
        let out = dashboard(&summary, |_| "Chawla & Sons".to_string(), Currency::Inr);

        assert!(out.contains("Overdue documents: - receivable, 0 payable"));
        assert!(out.contains("overdue ₹6,500.00"));
        let receivables = out.split("Payables ageing").next().unwrap();
        let docs: Vec<&str> = receivables
            .lines()
            .filter(|l| l.contains(" days") || l.starts_with("Current"))
            .map(|l| {
                let cells: Vec<&str> = l.split_whitespace().collect();
                cells[cells.len() - 2]
            })
            .collect();
        assert_eq!(docs, vec!["-"; 4]);
        assert!(out.contains("Chawla & Sons"));
        assert!(!out.contains("Party #3"));
        assert!(out.ends_with("Pending Tally sync: 4 records"));
    }

    #[test]
    fn test_limits_table_flags_over_limit() {
        let limit = LimitUtilization {
            limit_id: LimitId::new(1),
            party_id: PartyId::new(3),
            limit_type: LimitType::Purchase,
            total_limit: dec!(100000),
            used_limit: dec!(125000),
            available: dec!(-25000),
            utilization_percent: dec!(125),
            expiry_date: None,
            days_until_expiry: None,
            expiry_status: ExpiryStatus::NoExpiry,
        };
        let out = limits_table(&[limit], |_| "Chawla & Sons".to_string(), Currency::Inr);

        assert!(out.contains("Chawla & Sons"));
        assert!(out.contains("-₹25,000.00"));
        assert!(out.contains("125%"));
        assert!(out.contains("No expiry, over limit"));
    }

    #[test]
    fn test_sync_outcome() {
        let outcome = SyncOutcome {
            success: true,
            message: "Pushed 12 vouchers".to_string(),
            records_synced: Some(12),
        };
        assert_eq!(
            sync_outcome(&outcome),
            "Tally sync succeeded (12 records): Pushed 12 vouchers"
        );
    }
}
