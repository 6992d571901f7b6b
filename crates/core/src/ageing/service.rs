//! Ageing bucketizer.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::days::days_overdue_opt;
use super::types::{AgeingBucket, AgeingItem, AgeingSummary};

/// Service for classifying open balances by age.
pub struct AgeingService;

impl AgeingService {
    /// Bucket for a single due date as of `today`.
    ///
    /// Uses the same day count as the overdue badge, so a balance shown as
    /// "0 days overdue" is always `Current`.
    #[must_use]
    pub fn bucket_for(due_date: Option<NaiveDate>, today: NaiveDate) -> AgeingBucket {
        AgeingBucket::for_days(days_overdue_opt(due_date, today))
    }

    /// Sums outstanding balances into ageing buckets as of `today`.
    ///
    /// Items whose outstanding amount is not positive contribute to no
    /// bucket. Items without a due date are `Current`.
    #[must_use]
    pub fn bucketize<I>(items: I, today: NaiveDate) -> AgeingSummary
    where
        I: IntoIterator,
        I::Item: Into<AgeingItem>,
    {
        let mut summary = AgeingSummary::default();

        for item in items.into_iter().map(Into::into) {
            if item.outstanding <= Decimal::ZERO {
                continue;
            }
            summary.add(Self::bucket_for(item.due_date, today), item.outstanding);
        }

        summary
    }
}
