//! Invariant checks on validated records.

use rust_decimal::Decimal;

use super::ValidationError;
use crate::domain::{BnplLimit, Party, Transaction};

/// Checks the monetary invariants of a transaction.
///
/// # Errors
///
/// - `NegativeAmount` if `amount` or `balance_due` is negative
/// - `BalanceExceedsAmount` if `balance_due > amount`
pub fn check_transaction(txn: &Transaction) -> Result<(), ValidationError> {
    let record = || format!("transaction {}", txn.id);

    non_negative(record, "amount", txn.amount)?;

    if let Some(balance_due) = txn.balance_due {
        non_negative(record, "balanceDue", balance_due)?;
        if balance_due > txn.amount {
            return Err(ValidationError::BalanceExceedsAmount {
                id: txn.id,
                balance_due,
                amount: txn.amount,
            });
        }
    }

    Ok(())
}

/// Checks that both sides of a limit are non-negative.
///
/// `used_limit > total_limit` is allowed: over-limit is a state to surface.
pub fn check_limit(limit: &BnplLimit) -> Result<(), ValidationError> {
    let record = || format!("limit {}", limit.id);
    non_negative(record, "totalLimit", limit.total_limit)?;
    non_negative(record, "usedLimit", limit.used_limit)
}

/// Checks GSTIN shape and credit limit sign.
pub fn check_party(party: &Party) -> Result<(), ValidationError> {
    if let Some(gstin) = party.gstin.as_deref().filter(|g| !g.is_empty()) {
        let well_formed = gstin.len() == 15
            && gstin
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase());
        if !well_formed {
            return Err(ValidationError::InvalidGstin {
                id: party.id,
                value: gstin.to_string(),
            });
        }
    }

    if let Some(limit) = party.credit_limit {
        non_negative(|| format!("party {}", party.id), "creditLimit", limit)?;
    }

    Ok(())
}

fn non_negative(
    record: impl FnOnce() -> String,
    field: &'static str,
    value: Decimal,
) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount {
            record: record(),
            field,
            value,
        });
    }
    Ok(())
}
