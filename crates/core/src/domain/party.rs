//! Customers and vendors.

use ledgerdesk_shared::types::PartyId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Role a party plays in trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyType {
    /// Buys from us.
    Customer,
    /// Sells to us.
    Vendor,
    /// Both buys and sells.
    Both,
}

impl PartyType {
    /// Wire tag for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Vendor => "vendor",
            Self::Both => "both",
        }
    }
}

impl std::str::FromStr for PartyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "vendor" => Ok(Self::Vendor),
            "both" => Ok(Self::Both),
            _ => Err(ValidationError::UnknownTag {
                field: "type",
                value: s.to_string(),
            }),
        }
    }
}

/// A customer or vendor counter-party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Unique identifier.
    pub id: PartyId,
    /// Display name.
    pub name: String,
    /// Trade role.
    pub party_type: PartyType,
    /// GST identification number.
    pub gstin: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State.
    pub state: Option<String>,
    /// Postal code.
    pub pincode: Option<String>,
    /// Credit extended to or by this party.
    pub credit_limit: Option<Decimal>,
    /// Credit period in days.
    pub credit_period: Option<u32>,
}
