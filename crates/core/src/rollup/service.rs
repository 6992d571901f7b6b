//! Party-wise receivables/payables aggregation.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use ledgerdesk_shared::types::PartyId;
use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{PartyBalance, PartyRow};
use crate::domain::{LedgerSide, Party, Transaction, TransactionStatus};
use crate::validation::{ValidationError, ValidationMode, require_amount};

/// Service for rolling open documents up by party.
pub struct RollupService;

/// Parameters for building party rows.
#[derive(Debug, Clone, Copy)]
pub struct RowOptions {
    /// Which side of the books to roll up.
    pub side: LedgerSide,
    /// Reference date for document ages.
    pub as_of: NaiveDate,
    /// Treatment of absent balances and unknown parties.
    pub mode: ValidationMode,
}

#[derive(Default)]
struct RowStats {
    oldest_due_date: Option<NaiveDate>,
    age_days_sum: i64,
    last_payment_date: Option<NaiveDate>,
}

impl RollupService {
    /// Groups open documents by party.
    ///
    /// Only statuses `pending`, `overdue` and `partially_paid` contribute.
    /// Documents without a party are skipped. `overdue` counts documents
    /// whose stored status is `overdue`, regardless of due date.
    ///
    /// # Errors
    ///
    /// In strict mode, returns `MissingField` for a contributing document
    /// without `balanceDue`. Lenient mode reads it as zero.
    pub fn aggregate<'a, I>(
        transactions: I,
        mode: ValidationMode,
    ) -> Result<BTreeMap<PartyId, PartyBalance>, ValidationError>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut balances: BTreeMap<PartyId, PartyBalance> = BTreeMap::new();

        for (party_id, txn) in contributing(transactions) {
            let balance = require_amount(
                mode,
                || format!("transaction {}", txn.id),
                "balanceDue",
                txn.balance_due,
            )?;

            let entry = balances.entry(party_id).or_default();
            entry.total = entry.total.saturating_add(balance);
            if txn.status == TransactionStatus::Overdue {
                entry.overdue = entry.overdue.saturating_add(balance);
            }
            entry.count += 1;
        }

        Ok(balances)
    }

    /// Builds display rows for one side of the books.
    ///
    /// Rows follow the order of `parties`. Parties without open documents
    /// are omitted.
    ///
    /// # Errors
    ///
    /// Returns whatever [`Self::aggregate`] returns. In strict mode, a
    /// document referencing a party missing from `parties` yields
    /// `UnknownParty`; lenient mode appends a placeholder row for it.
    pub fn rows(
        parties: &[Party],
        transactions: &[Transaction],
        options: RowOptions,
    ) -> Result<Vec<PartyRow>, ValidationError> {
        let documents = || {
            transactions
                .iter()
                .filter(move |t| t.transaction_type == options.side.document_type())
        };

        let known = |id: PartyId| parties.iter().any(|p| p.id == id);

        let balances = Self::aggregate(documents(), options.mode)?;
        if options.mode.is_strict()
            && let Some((party, txn)) = contributing(documents()).find(|(p, _)| !known(*p))
        {
            return Err(ValidationError::UnknownParty {
                transaction: txn.id,
                party,
            });
        }
        let mut stats = collect_stats(documents(), transactions, options);

        let mut rows = Vec::with_capacity(balances.len());
        for party in parties {
            if let Some(balance) = balances.get(&party.id) {
                let party_stats = stats.remove(&party.id).unwrap_or_default();
                rows.push(make_row(party.id, party.name.clone(), *balance, party_stats));
            }
        }

        for (party_id, balance) in balances.iter().filter(|(id, _)| !known(**id)) {
            let party_stats = stats.remove(party_id).unwrap_or_default();
            rows.push(make_row(
                *party_id,
                format!("Party #{party_id}"),
                *balance,
                party_stats,
            ));
        }

        Ok(rows)
    }
}

/// Documents that count towards a party's open balance, with their party.
fn contributing<'a, I>(transactions: I) -> impl Iterator<Item = (PartyId, &'a Transaction)>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.status.is_open_for_rollup())
        .filter_map(|t| t.party_id.map(|p| (p, t)))
}

fn collect_stats<'a, I>(
    documents: I,
    all: &[Transaction],
    options: RowOptions,
) -> HashMap<PartyId, RowStats>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut stats: HashMap<PartyId, RowStats> = HashMap::new();

    for (party_id, txn) in contributing(documents) {
        let entry = stats.entry(party_id).or_default();
        if let Some(due) = txn.due_date {
            entry.oldest_due_date = Some(entry.oldest_due_date.map_or(due, |d| d.min(due)));
        }
        entry.age_days_sum += options
            .as_of
            .signed_duration_since(txn.transaction_date)
            .num_days()
            .max(0);
    }

    let settlement = options.side.settlement_type();
    for txn in all
        .iter()
        .filter(|t| t.transaction_type == settlement && !t.status.is_void())
    {
        let Some(entry) = txn.party_id.and_then(|p| stats.get_mut(&p)) else {
            continue;
        };
        let date = txn.transaction_date;
        entry.last_payment_date = Some(entry.last_payment_date.map_or(date, |d| d.max(date)));
    }

    stats
}

fn make_row(
    party_id: PartyId,
    party_name: String,
    balance: PartyBalance,
    stats: RowStats,
) -> PartyRow {
    let avg_collection_days = (balance.count > 0).then(|| {
        (Decimal::from(stats.age_days_sum) / Decimal::from(balance.count))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    });

    PartyRow {
        party_id,
        party_name,
        total_due: balance.total,
        overdue_amount: balance.overdue,
        invoice_count: balance.count,
        last_payment_date: stats.last_payment_date,
        oldest_due_date: stats.oldest_due_date,
        avg_collection_days,
    }
}
