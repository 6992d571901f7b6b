//! Property-based tests for record invariants.

use chrono::NaiveDate;
use ledgerdesk_shared::types::{LimitId, PartyId, TransactionId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{ValidationError, check_limit, check_party, check_transaction};
use crate::domain::{
    BnplLimit, LimitType, Party, PartyType, Transaction, TransactionStatus, TransactionType,
};

/// Strategy for a non-negative amount from 0.00 to 10,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

fn make_txn(amount: Decimal, balance_due: Option<Decimal>) -> Transaction {
    Transaction {
        id: TransactionId::new(1),
        transaction_number: "INV-0001".to_string(),
        transaction_type: TransactionType::SalesInvoice,
        party_id: Some(PartyId::new(1)),
        amount,
        balance_due,
        transaction_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        due_date: None,
        status: TransactionStatus::Pending,
        is_bnpl: false,
        notes: None,
    }
}

fn make_party(gstin: Option<&str>) -> Party {
    Party {
        id: PartyId::new(4),
        name: "Mehta Steel".to_string(),
        party_type: PartyType::Vendor,
        gstin: gstin.map(str::to_string),
        email: None,
        phone: None,
        address: None,
        city: None,
        state: None,
        pincode: None,
        credit_limit: None,
        credit_period: Some(30),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A balance within the document total is always accepted.
    #[test]
    fn prop_balance_within_amount_accepted(total in amount(), ratio in 0u32..=100) {
        let balance = (total * Decimal::from(ratio) / Decimal::ONE_HUNDRED).round_dp(2);
        prop_assume!(balance <= total);
        prop_assert!(check_transaction(&make_txn(total, Some(balance))).is_ok());
    }

    /// A balance larger than the document total is always rejected.
    #[test]
    fn prop_balance_above_amount_rejected(total in amount(), excess in 1i64..1_000_000) {
        let balance = total + Decimal::new(excess, 2);
        let result = check_transaction(&make_txn(total, Some(balance)));
        prop_assert!(
            matches!(result, Err(ValidationError::BalanceExceedsAmount { .. })),
            "expected BalanceExceedsAmount, got {:?}",
            result
        );
    }

    /// Negative amounts are rejected whatever the balance.
    #[test]
    fn prop_negative_amount_rejected(paise in 1i64..1_000_000_000) {
        let result = check_transaction(&make_txn(Decimal::new(-paise, 2), None));
        let is_negative_amount = matches!(
            result,
            Err(ValidationError::NegativeAmount { field: "amount", .. })
        );
        prop_assert!(is_negative_amount);
    }

    /// Over-limit usage is a valid state.
    #[test]
    fn prop_over_limit_accepted(total in amount(), used in amount()) {
        let limit = BnplLimit {
            id: LimitId::new(1),
            party_id: PartyId::new(1),
            limit_type: LimitType::Purchase,
            total_limit: total,
            used_limit: used,
            expiry_date: None,
            provider: None,
        };
        prop_assert!(check_limit(&limit).is_ok());
    }
}

#[test]
fn test_absent_balance_is_accepted() {
    assert!(check_transaction(&make_txn(Decimal::ONE_HUNDRED, None)).is_ok());
}

#[test]
fn test_gstin_shape() {
    assert!(check_party(&make_party(Some("27AAPFU0939F1ZV"))).is_ok());
    assert!(check_party(&make_party(None)).is_ok());
    assert!(check_party(&make_party(Some(""))).is_ok());
    assert!(matches!(
        check_party(&make_party(Some("27aapfu0939f1zv"))),
        Err(ValidationError::InvalidGstin { .. })
    ));
    assert!(matches!(
        check_party(&make_party(Some("27AAPFU0939F1Z"))),
        Err(ValidationError::InvalidGstin { .. })
    ));
}

#[test]
fn test_validation_error_maps_into_app_error() {
    use ledgerdesk_shared::AppError;

    let not_found: AppError = ValidationError::UnknownParty {
        transaction: TransactionId::new(1),
        party: PartyId::new(99),
    }
    .into();
    assert_eq!(not_found.error_code(), "NOT_FOUND");

    let invalid: AppError = ValidationError::MalformedPayload("expected array".into()).into();
    assert_eq!(invalid.error_code(), "VALIDATION_ERROR");
}
