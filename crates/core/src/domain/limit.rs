//! BNPL and credit limit records.

use chrono::NaiveDate;
use ledgerdesk_shared::types::{LimitId, PartyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Direction of a financing limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitType {
    /// Limit we can draw on when buying from a vendor.
    Purchase,
    /// Limit we extend to a customer.
    Sales,
}

impl LimitType {
    /// Wire tag for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Sales => "sales",
        }
    }
}

impl std::str::FromStr for LimitType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "purchase" => Ok(Self::Purchase),
            "sales" => Ok(Self::Sales),
            _ => Err(ValidationError::UnknownTag {
                field: "limitType",
                value: s.to_string(),
            }),
        }
    }
}

/// A pre-configured BNPL/credit limit for one party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BnplLimit {
    /// Unique identifier.
    pub id: LimitId,
    /// Party the limit applies to.
    pub party_id: PartyId,
    /// Direction.
    pub limit_type: LimitType,
    /// Sanctioned amount.
    pub total_limit: Decimal,
    /// Amount drawn so far. May exceed `total_limit`.
    pub used_limit: Decimal,
    /// Date after which the limit lapses.
    pub expiry_date: Option<NaiveDate>,
    /// Financing provider name.
    pub provider: Option<String>,
}
