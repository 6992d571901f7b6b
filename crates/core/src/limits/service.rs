//! Limit utilization tracker.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{ExpiryStatus, LimitUtilization};
use crate::domain::BnplLimit;

/// Service for limit utilization and expiry.
pub struct LimitService;

impl LimitService {
    /// Utilization percentage rounded half-up to a whole number.
    ///
    /// Returns zero when `total_limit` is zero. Usage above the limit yields
    /// more than 100 and is not clamped; a ratio too large for `Decimal`
    /// saturates at [`Decimal::MAX`] (or `MIN` for a negative ratio).
    #[must_use]
    pub fn utilization_percent(used_limit: Decimal, total_limit: Decimal) -> Decimal {
        if total_limit.is_zero() {
            return Decimal::ZERO;
        }
        used_limit
            .checked_div(total_limit)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(
                if used_limit.is_sign_negative() == total_limit.is_sign_negative() {
                    Decimal::MAX
                } else {
                    Decimal::MIN
                },
            )
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Classifies how close `expiry_date` is to `today`.
    #[must_use]
    pub fn expiry_status(
        expiry_date: Option<NaiveDate>,
        today: NaiveDate,
        warning_days: i64,
    ) -> ExpiryStatus {
        match expiry_date.map(|d| d.signed_duration_since(today).num_days()) {
            None => ExpiryStatus::NoExpiry,
            Some(days) if days < 0 => ExpiryStatus::Expired,
            Some(days) if days <= warning_days => ExpiryStatus::ExpiringSoon,
            Some(_) => ExpiryStatus::Active,
        }
    }

    /// Evaluates a limit record as of `today`.
    #[must_use]
    pub fn evaluate(limit: &BnplLimit, today: NaiveDate, warning_days: i64) -> LimitUtilization {
        LimitUtilization {
            limit_id: limit.id,
            party_id: limit.party_id,
            limit_type: limit.limit_type,
            total_limit: limit.total_limit,
            used_limit: limit.used_limit,
            available: limit.total_limit.saturating_sub(limit.used_limit),
            utilization_percent: Self::utilization_percent(limit.used_limit, limit.total_limit),
            expiry_date: limit.expiry_date,
            days_until_expiry: limit
                .expiry_date
                .map(|d| d.signed_duration_since(today).num_days()),
            expiry_status: Self::expiry_status(limit.expiry_date, today, warning_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{days_ago, days_ahead, limit, today};
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(150000), dec!(250000), dec!(60))]
    #[case(dec!(1), dec!(3), dec!(33))]
    #[case(dec!(2), dec!(3), dec!(67))]
    #[case(dec!(67), dec!(200), dec!(34))]
    #[case(dec!(1), dec!(200), dec!(1))]
    #[case(dec!(0), dec!(5000), dec!(0))]
    #[case(dec!(5000), dec!(5000), dec!(100))]
    fn test_utilization_rounding(
        #[case] used: Decimal,
        #[case] total: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(LimitService::utilization_percent(used, total), expected);
    }

    #[test]
    fn test_utilization_zero_limit() {
        assert_eq!(
            LimitService::utilization_percent(dec!(99999), Decimal::ZERO),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_over_limit_is_not_clamped() {
        let view = LimitService::evaluate(&limit(1, 1, dec!(100000), dec!(125000)), today(), 30);
        assert_eq!(view.utilization_percent, dec!(125));
        assert_eq!(view.available, dec!(-25000));
        assert!(view.is_over_limit());
    }

    #[test]
    fn test_utilization_saturates_instead_of_overflowing() {
        let huge = Decimal::from_scientific("1e27").unwrap();
        assert_eq!(LimitService::utilization_percent(huge, Decimal::ONE), Decimal::MAX);
        assert_eq!(
            LimitService::utilization_percent(Decimal::ONE, Decimal::new(1, 28)),
            Decimal::MAX
        );
        assert_eq!(LimitService::utilization_percent(-huge, Decimal::ONE), Decimal::MIN);

        let view = LimitService::evaluate(&limit(3, 1, Decimal::MIN, Decimal::MAX), today(), 30);
        assert_eq!(view.available, Decimal::MIN);
    }

    #[rstest]
    #[case(None, ExpiryStatus::NoExpiry)]
    #[case(Some(days_ago(1)), ExpiryStatus::Expired)]
    #[case(Some(today()), ExpiryStatus::ExpiringSoon)]
    #[case(Some(days_ahead(30)), ExpiryStatus::ExpiringSoon)]
    #[case(Some(days_ahead(31)), ExpiryStatus::Active)]
    fn test_expiry_status(#[case] expiry: Option<NaiveDate>, #[case] expected: ExpiryStatus) {
        assert_eq!(LimitService::expiry_status(expiry, today(), 30), expected);
    }

    #[test]
    fn test_evaluate_days_until_expiry() {
        let mut record = limit(2, 5, dec!(500000), dec!(100000));
        record.expiry_date = Some(days_ahead(12));
        let view = LimitService::evaluate(&record, today(), 30);

        assert_eq!(view.days_until_expiry, Some(12));
        assert_eq!(view.expiry_status, ExpiryStatus::ExpiringSoon);
        assert_eq!(view.utilization_percent, dec!(20));
        assert_eq!(view.available, dec!(400000));
        assert!(!view.is_over_limit());
    }

    proptest! {
        /// The percentage differs from the exact ratio by at most one half.
        #[test]
        fn prop_rounding_within_half_percent(used in 0i64..10_000_000, total in 1i64..10_000_000) {
            let used = Decimal::from(used);
            let total = Decimal::from(total);
            let exact = used / total * Decimal::ONE_HUNDRED;
            let rounded = LimitService::utilization_percent(used, total);

            prop_assert_eq!(rounded.fract(), Decimal::ZERO);
            prop_assert!((rounded - exact).abs() <= dec!(0.5));
        }

        /// A zero limit always reports zero utilization.
        #[test]
        fn prop_zero_limit_guard(used in 0i64..1_000_000_000) {
            prop_assert_eq!(
                LimitService::utilization_percent(Decimal::from(used), Decimal::ZERO),
                Decimal::ZERO
            );
        }
    }
}
