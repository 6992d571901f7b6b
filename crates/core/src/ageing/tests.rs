//! Property-based tests for ageing.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::days::days_overdue_opt;
use super::service::AgeingService;
use super::types::{AgeingBucket, AgeingItem};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

/// Strategy for an open balance from 0.01 to 1,000,000.00.
fn balance() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

/// Strategy for a due date between 200 days ago and 200 days ahead, or none.
fn due_date() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of((-200i64..200i64).prop_map(|offset| {
        let magnitude = Days::new(offset.unsigned_abs());
        if offset < 0 {
            today().checked_sub_days(magnitude).unwrap()
        } else {
            today().checked_add_days(magnitude).unwrap()
        }
    }))
}

fn item() -> impl Strategy<Value = AgeingItem> {
    (balance(), due_date()).prop_map(|(outstanding, due_date)| AgeingItem {
        outstanding,
        due_date,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The four buckets sum exactly to the total outstanding balance.
    #[test]
    fn prop_bucket_sum_equals_outstanding(items in prop::collection::vec(item(), 0..200)) {
        let expected: Decimal = items.iter().map(|i| i.outstanding).sum();
        let summary = AgeingService::bucketize(items.clone(), today());

        prop_assert_eq!(
            summary.current + summary.days_1_to_30 + summary.days_31_to_60 + summary.days_60_plus,
            expected
        );
        prop_assert_eq!(summary.total(), expected);

        let counted = AgeingBucket::ALL.iter().filter_map(|b| summary.count(*b)).sum::<usize>();
        prop_assert_eq!(counted, items.len());
    }

    /// Zero balances never change the result.
    #[test]
    fn prop_zero_balances_ignored(
        items in prop::collection::vec(item(), 0..50),
        zero_due in due_date(),
    ) {
        let base = AgeingService::bucketize(items.clone(), today());

        let mut padded = items;
        padded.push(AgeingItem { outstanding: Decimal::ZERO, due_date: zero_due });
        let with_zero = AgeingService::bucketize(padded, today());

        prop_assert_eq!(base, with_zero);
    }

    /// Each item lands in exactly the bucket its badge day count implies.
    #[test]
    fn prop_bucket_matches_badge(item in item()) {
        let badge = days_overdue_opt(item.due_date, today());
        let summary = AgeingService::bucketize([item], today());
        let bucket = AgeingBucket::for_days(badge);

        prop_assert_eq!(summary.amount(bucket), item.outstanding);
        prop_assert_eq!(summary.count(bucket), Some(1));
        prop_assert_eq!(badge == 0, bucket == AgeingBucket::Current);
    }
}
