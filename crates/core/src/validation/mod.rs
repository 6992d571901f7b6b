//! Boundary validation for records fetched from the accounting API.
//!
//! Two policies exist side by side:
//! - `Lenient` keeps display views populated: absent numbers read as zero,
//!   invariant violations are reported to the caller but do not drop the
//!   record.
//! - `Strict` rejects anything absent or inconsistent. Used by tests and by
//!   operators hunting data-quality bugs.
//!
//! Malformed values (unparseable dates or decimals, unknown tags) are
//! rejected in both modes.

pub mod error;
pub mod parse;
pub mod rules;

#[cfg(test)]
mod props;

pub use error::ValidationError;
pub use parse::{parse_date, parse_decimal, require_amount};
pub use rules::{check_limit, check_party, check_transaction};

use serde::{Deserialize, Serialize};

/// How absent or inconsistent values are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Coerce absent numbers to zero.
    #[default]
    Lenient,
    /// Reject absent numbers and invariant violations.
    Strict,
}

impl ValidationMode {
    /// Maps the `validation.strict` config flag to a mode.
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }

    /// Returns true for `Strict`.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}
