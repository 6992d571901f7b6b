//! Ordering of receivables/payables rows.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::types::PartyRow;

/// Column a rollup table is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupSortKey {
    /// Party name, case-insensitive.
    Name,
    /// Outstanding total.
    #[default]
    TotalDue,
    /// Latest settlement date.
    LastPaymentDate,
    /// Earliest open due date.
    OldestDueDate,
    /// Mean age of open documents.
    AvgCollectionDays,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

impl SortDirection {
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Sorts rows in place by `key`.
///
/// The sort is stable: rows that compare equal keep their input order.
/// Rows missing the key value compare equal to each other and always come
/// after rows that have one, in either direction.
pub fn sort_rows(rows: &mut [PartyRow], key: RollupSortKey, direction: SortDirection) {
    rows.sort_by(|a, b| compare(a, b, key, direction));
}

fn compare(a: &PartyRow, b: &PartyRow, key: RollupSortKey, direction: SortDirection) -> Ordering {
    match key {
        RollupSortKey::Name => direction.apply(
            a.party_name
                .to_lowercase()
                .cmp(&b.party_name.to_lowercase()),
        ),
        RollupSortKey::TotalDue => direction.apply(a.total_due.cmp(&b.total_due)),
        RollupSortKey::LastPaymentDate => {
            compare_present_first(a.last_payment_date, b.last_payment_date, direction)
        }
        RollupSortKey::OldestDueDate => {
            compare_present_first(a.oldest_due_date, b.oldest_due_date, direction)
        }
        RollupSortKey::AvgCollectionDays => {
            compare_present_first(a.avg_collection_days, b.avg_collection_days, direction)
        }
    }
}

fn compare_present_first<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
