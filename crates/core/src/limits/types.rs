//! Limit utilization types.

use chrono::NaiveDate;
use ledgerdesk_shared::types::{LimitId, PartyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::LimitType;

/// How close a limit is to lapsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// The limit never lapses.
    NoExpiry,
    /// Expiry is beyond the warning window.
    Active,
    /// Expiry falls within the warning window (today included).
    ExpiringSoon,
    /// Expiry date is in the past.
    Expired,
}

impl ExpiryStatus {
    /// Badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoExpiry => "No expiry",
            Self::Active => "Active",
            Self::ExpiringSoon => "Expiring soon",
            Self::Expired => "Expired",
        }
    }
}

/// Utilization view of one limit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitUtilization {
    /// Limit record.
    pub limit_id: LimitId,
    /// Party the limit applies to.
    pub party_id: PartyId,
    /// Direction.
    pub limit_type: LimitType,
    /// Sanctioned amount.
    pub total_limit: Decimal,
    /// Amount drawn.
    pub used_limit: Decimal,
    /// `total_limit - used_limit`; negative when over limit.
    pub available: Decimal,
    /// Whole-number utilization percentage, unclamped.
    pub utilization_percent: Decimal,
    /// Expiry date.
    pub expiry_date: Option<NaiveDate>,
    /// Days from today until expiry; negative once expired.
    pub days_until_expiry: Option<i64>,
    /// Expiry proximity.
    pub expiry_status: ExpiryStatus,
}

impl LimitUtilization {
    /// Whether more has been drawn than sanctioned.
    #[must_use]
    pub fn is_over_limit(&self) -> bool {
        self.used_limit > self.total_limit
    }
}
