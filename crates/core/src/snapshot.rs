//! Immutable snapshot of fetched records.

use chrono::NaiveDate;
use ledgerdesk_shared::types::PartyId;
use serde::{Deserialize, Serialize};

use crate::ageing::{AgeingService, AgeingSummary};
use crate::domain::{BnplLimit, LedgerSide, Party, Transaction};
use crate::limits::{LimitService, LimitUtilization};
use crate::rollup::{PartyRow, RollupService, RowOptions};
use crate::validation::{ValidationError, ValidationMode};

/// Every record a view needs, taken at one point in time.
///
/// Views are recomputed from the whole snapshot on every call; nothing is
/// cached between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Reference date for ageing and expiry.
    pub as_of: NaiveDate,
    /// Sales and purchase documents.
    pub transactions: Vec<Transaction>,
    /// Customers and vendors.
    pub parties: Vec<Party>,
    /// BNPL/credit limits.
    pub limits: Vec<BnplLimit>,
}

impl LedgerSnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub const fn new(
        as_of: NaiveDate,
        transactions: Vec<Transaction>,
        parties: Vec<Party>,
        limits: Vec<BnplLimit>,
    ) -> Self {
        Self {
            as_of,
            transactions,
            parties,
            limits,
        }
    }

    /// Looks up a party by ID.
    #[must_use]
    pub fn party(&self, id: PartyId) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == id)
    }

    /// Display name for a party, falling back to its ID.
    #[must_use]
    pub fn party_name(&self, id: PartyId) -> String {
        self.party(id)
            .map_or_else(|| format!("Party #{id}"), |p| p.name.clone())
    }

    /// Documents carrying a positive, non-void balance on `side`.
    pub fn open_documents(&self, side: LedgerSide) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |t| t.is_open_on(side))
    }

    /// Ageing buckets for one side of the books.
    #[must_use]
    pub fn ageing(&self, side: LedgerSide) -> AgeingSummary {
        AgeingService::bucketize(self.open_documents(side), self.as_of)
    }

    /// Party rows for one side of the books.
    ///
    /// # Errors
    ///
    /// See [`RollupService::rows`].
    pub fn party_rows(
        &self,
        side: LedgerSide,
        mode: ValidationMode,
    ) -> Result<Vec<PartyRow>, ValidationError> {
        RollupService::rows(
            &self.parties,
            &self.transactions,
            RowOptions {
                side,
                as_of: self.as_of,
                mode,
            },
        )
    }

    /// Utilization of every limit in the snapshot.
    #[must_use]
    pub fn limit_utilizations(&self, warning_days: i64) -> Vec<LimitUtilization> {
        self.limits
            .iter()
            .map(|l| LimitService::evaluate(l, self.as_of, warning_days))
            .collect()
    }
}
