//! Validation error types.

use ledgerdesk_shared::AppError;
use ledgerdesk_shared::types::{PartyId, TransactionId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a record is malformed or violates an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // ========== Shape Errors ==========
    /// A field required in strict mode was absent or null.
    #[error("Missing required field `{field}` on {record}")]
    MissingField {
        /// Record description, e.g. "transaction 12".
        record: String,
        /// Wire field name.
        field: &'static str,
    },

    /// A monetary field was not a decimal.
    #[error("Invalid decimal for `{field}`: {value:?}")]
    InvalidDecimal {
        /// Wire field name.
        field: &'static str,
        /// Raw value received.
        value: String,
    },

    /// A date field could not be parsed.
    #[error("Invalid date for `{field}`: {value:?}")]
    InvalidDate {
        /// Wire field name.
        field: &'static str,
        /// Raw value received.
        value: String,
    },

    /// A tag outside the closed set for its field.
    #[error("Unknown {field} tag: {value:?}")]
    UnknownTag {
        /// Wire field name.
        field: &'static str,
        /// Raw value received.
        value: String,
    },

    /// The payload did not have the expected structure.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    // ========== Invariant Errors ==========
    /// A monetary field is negative.
    #[error("`{field}` cannot be negative on {record}: {value}")]
    NegativeAmount {
        /// Record description.
        record: String,
        /// Wire field name.
        field: &'static str,
        /// Offending value.
        value: Decimal,
    },

    /// `balanceDue` is larger than the document total.
    #[error("Balance due {balance_due} exceeds amount {amount} on transaction {id}")]
    BalanceExceedsAmount {
        /// Transaction ID.
        id: TransactionId,
        /// Reported balance.
        balance_due: Decimal,
        /// Document total.
        amount: Decimal,
    },

    /// GSTIN is not 15 upper-case alphanumerics.
    #[error("Invalid GSTIN for party {id}: {value:?}")]
    InvalidGstin {
        /// Party ID.
        id: PartyId,
        /// Raw value received.
        value: String,
    },

    // ========== Reference Errors ==========
    /// A transaction points at a party that is not in the snapshot.
    #[error("Transaction {transaction} references unknown party {party}")]
    UnknownParty {
        /// Referencing transaction.
        transaction: TransactionId,
        /// Missing party.
        party: PartyId,
    },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnknownParty { .. } => Self::NotFound(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
