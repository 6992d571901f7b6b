//! Ageing data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Transaction;

/// Day-range classification of an outstanding balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeingBucket {
    /// Not yet due.
    #[serde(rename = "current")]
    Current,
    /// 1 to 30 days overdue.
    #[serde(rename = "days1to30")]
    Days1To30,
    /// 31 to 60 days overdue.
    #[serde(rename = "days31to60")]
    Days31To60,
    /// More than 60 days overdue.
    #[serde(rename = "days60plus")]
    Days60Plus,
}

impl AgeingBucket {
    /// All buckets, youngest first.
    pub const ALL: [Self; 4] = [
        Self::Current,
        Self::Days1To30,
        Self::Days31To60,
        Self::Days60Plus,
    ];

    /// Classifies a days-overdue count. Non-positive counts are `Current`.
    #[must_use]
    pub const fn for_days(days_overdue: i64) -> Self {
        match days_overdue {
            i64::MIN..=0 => Self::Current,
            1..=30 => Self::Days1To30,
            31..=60 => Self::Days31To60,
            _ => Self::Days60Plus,
        }
    }

    /// Column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Days1To30 => "1-30 days",
            Self::Days31To60 => "31-60 days",
            Self::Days60Plus => "60+ days",
        }
    }
}

/// One open balance to be aged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeingItem {
    /// Outstanding amount.
    pub outstanding: Decimal,
    /// Due date, if any.
    pub due_date: Option<NaiveDate>,
}

impl From<&Transaction> for AgeingItem {
    fn from(txn: &Transaction) -> Self {
        Self {
            outstanding: txn.outstanding(),
            due_date: txn.due_date,
        }
    }
}

/// Number of items that landed in each bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    /// Items not yet due.
    pub current: usize,
    /// Items 1-30 days overdue.
    #[serde(rename = "days1to30")]
    pub days_1_to_30: usize,
    /// Items 31-60 days overdue.
    #[serde(rename = "days31to60")]
    pub days_31_to_60: usize,
    /// Items more than 60 days overdue.
    #[serde(rename = "days60plus")]
    pub days_60_plus: usize,
}

/// Ageing buckets for one population of open balances.
///
/// Sums saturate at [`Decimal::MAX`] instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeingSummary {
    /// Not yet due.
    pub current: Decimal,
    /// 1-30 days overdue.
    #[serde(rename = "days1to30")]
    pub days_1_to_30: Decimal,
    /// 31-60 days overdue.
    #[serde(rename = "days31to60")]
    pub days_31_to_60: Decimal,
    /// More than 60 days overdue.
    #[serde(rename = "days60plus")]
    pub days_60_plus: Decimal,
    /// Item counts per bucket; `None` when the source only reported amounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<BucketCounts>,
}

impl Default for AgeingSummary {
    /// An empty population: zero amounts, zero counts.
    fn default() -> Self {
        Self {
            current: Decimal::ZERO,
            days_1_to_30: Decimal::ZERO,
            days_31_to_60: Decimal::ZERO,
            days_60_plus: Decimal::ZERO,
            counts: Some(BucketCounts::default()),
        }
    }
}

impl AgeingSummary {
    /// Builds a summary from bucket amounts alone. Counts are unknown.
    #[must_use]
    pub const fn from_amounts(
        current: Decimal,
        days_1_to_30: Decimal,
        days_31_to_60: Decimal,
        days_60_plus: Decimal,
    ) -> Self {
        Self {
            current,
            days_1_to_30,
            days_31_to_60,
            days_60_plus,
            counts: None,
        }
    }

    /// Amount held in `bucket`.
    #[must_use]
    pub const fn amount(&self, bucket: AgeingBucket) -> Decimal {
        match bucket {
            AgeingBucket::Current => self.current,
            AgeingBucket::Days1To30 => self.days_1_to_30,
            AgeingBucket::Days31To60 => self.days_31_to_60,
            AgeingBucket::Days60Plus => self.days_60_plus,
        }
    }

    /// Number of items in `bucket`, when known.
    #[must_use]
    pub fn count(&self, bucket: AgeingBucket) -> Option<usize> {
        self.counts.map(|c| match bucket {
            AgeingBucket::Current => c.current,
            AgeingBucket::Days1To30 => c.days_1_to_30,
            AgeingBucket::Days31To60 => c.days_31_to_60,
            AgeingBucket::Days60Plus => c.days_60_plus,
        })
    }

    /// Grand total: the sum of the four buckets.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.current
            .saturating_add(self.days_1_to_30)
            .saturating_add(self.days_31_to_60)
            .saturating_add(self.days_60_plus)
    }

    /// Amount past its due date.
    #[must_use]
    pub fn overdue(&self) -> Decimal {
        self.days_1_to_30
            .saturating_add(self.days_31_to_60)
            .saturating_add(self.days_60_plus)
    }

    /// Number of items past their due date, when known.
    #[must_use]
    pub fn overdue_count(&self) -> Option<usize> {
        self.counts
            .map(|c| c.days_1_to_30 + c.days_31_to_60 + c.days_60_plus)
    }

    pub(crate) fn add(&mut self, bucket: AgeingBucket, amount: Decimal) {
        let counts = self.counts.get_or_insert_with(BucketCounts::default);
        let (sum, count) = match bucket {
            AgeingBucket::Current => (&mut self.current, &mut counts.current),
            AgeingBucket::Days1To30 => (&mut self.days_1_to_30, &mut counts.days_1_to_30),
            AgeingBucket::Days31To60 => (&mut self.days_31_to_60, &mut counts.days_31_to_60),
            AgeingBucket::Days60Plus => (&mut self.days_60_plus, &mut counts.days_60_plus),
        };
        *sum = sum.saturating_add(amount);
        *count += 1;
    }
}
