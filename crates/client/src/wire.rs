//! Wire DTOs and their conversion into domain records.
//!
//! Monetary fields arrive as strings (`"1500.00"`) or bare JSON numbers and
//! are kept as raw JSON until conversion. serde_json's `arbitrary_precision`
//! feature keeps a number's source text, so both forms parse exactly. Tags
//! and dates are parsed in both validation modes; only absent amounts and
//! invariant violations depend on the mode.

use chrono::NaiveDate;
use ledgerdesk_core::ageing::AgeingSummary;
use ledgerdesk_core::domain::{BnplLimit, Party, Transaction};
use ledgerdesk_core::rollup::PartyRow;
use ledgerdesk_core::validation::{
    check_limit, check_party, check_transaction, parse_date, parse_decimal, require_amount,
};
use ledgerdesk_core::{ValidationError, ValidationMode};
use ledgerdesk_shared::types::{LimitId, PartyId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Transaction as served by `GET /api/transactions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TransactionDto {
    pub id: i64,
    #[serde(default)]
    pub transaction_number: Option<String>,
    pub transaction_type: String,
    #[serde(default)]
    pub party_id: Option<i64>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub balance_due: Option<Value>,
    #[serde(default)]
    pub transaction_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    pub status: String,
    #[serde(default)]
    pub is_bnpl: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Party as served by `GET /api/parties`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct PartyDto {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub party_type: String,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub credit_limit: Option<Value>,
    #[serde(default)]
    pub credit_period: Option<u32>,
}

/// Limit as served by `GET /api/bnpl-limits`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct BnplLimitDto {
    pub id: i64,
    pub party_id: i64,
    pub limit_type: String,
    #[serde(default)]
    pub total_limit: Option<Value>,
    #[serde(default)]
    pub used_limit: Option<Value>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
}

/// Pre-joined rollup row from the finance endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct PartyRowDto {
    pub party_id: i64,
    pub party_name: String,
    #[serde(default)]
    pub total_due: Option<Value>,
    #[serde(default)]
    pub overdue_amount: Option<Value>,
    #[serde(default)]
    pub invoice_count: Option<usize>,
    #[serde(default)]
    pub last_payment_date: Option<String>,
    #[serde(default)]
    pub oldest_due_date: Option<String>,
    #[serde(default)]
    pub avg_collection_days: Option<Value>,
}

/// Bucket amounts inside the dashboard bundle.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(missing_docs)]
pub struct AgeingDto {
    #[serde(default)]
    pub current: Option<Value>,
    #[serde(default)]
    pub days1to30: Option<Value>,
    #[serde(default)]
    pub days31to60: Option<Value>,
    #[serde(default)]
    pub days60plus: Option<Value>,
}

/// Bundle served by `GET /api/dashboard`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct DashboardDto {
    #[serde(default)]
    pub receivables_ageing: AgeingDto,
    #[serde(default)]
    pub payables_ageing: AgeingDto,
    #[serde(default)]
    pub bnpl_limits: Vec<BnplLimitDto>,
    #[serde(default)]
    pub recent_transactions: Vec<TransactionDto>,
    #[serde(default)]
    pub pending_sync_count: Option<u64>,
}

/// Direction of a Tally synchronisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncType {
    /// Send local records to Tally.
    Push,
    /// Import records from Tally.
    Pull,
}

impl std::fmt::Display for SyncType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Push => "push",
            Self::Pull => "pull",
        })
    }
}

/// Body of `POST /api/tally-sync`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    /// Requested direction.
    pub sync_type: SyncType,
}

/// Reply to `POST /api/tally-sync`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcome {
    /// Whether the sync completed.
    pub success: bool,
    /// Message from the API.
    #[serde(default)]
    pub message: String,
    /// Number of records moved, when reported.
    #[serde(default)]
    pub records_synced: Option<u64>,
}

// ============================================================================
// Conversion
// ============================================================================

fn decimal(field: &'static str, raw: &Value) -> Result<Decimal, ValidationError> {
    match raw {
        Value::String(s) => parse_decimal(field, s),
        Value::Number(n) => parse_decimal(field, &n.to_string()),
        other => Err(ValidationError::InvalidDecimal {
            field,
            value: other.to_string(),
        }),
    }
}

fn optional_decimal(
    field: &'static str,
    raw: Option<&Value>,
) -> Result<Option<Decimal>, ValidationError> {
    raw.map(|v| decimal(field, v)).transpose()
}

fn optional_date(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, ValidationError> {
    raw.filter(|s| !s.trim().is_empty())
        .map(|s| parse_date(field, s))
        .transpose()
}

/// Reads a monetary field, logging when lenient mode substitutes zero.
fn amount(
    mode: ValidationMode,
    record: &dyn Fn() -> String,
    field: &'static str,
    raw: Option<&Value>,
) -> Result<Decimal, ValidationError> {
    let parsed = optional_decimal(field, raw)?;
    if parsed.is_none() && !mode.is_strict() {
        warn!(record = %record(), field, "missing amount read as zero");
    }
    require_amount(mode, record, field, parsed)
}

/// Applies an invariant check: strict mode fails, lenient mode logs and keeps.
fn enforce(
    mode: ValidationMode,
    check: Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    match check {
        Err(err) if !mode.is_strict() => {
            warn!(error = %err, "keeping inconsistent record");
            Ok(())
        }
        other => other,
    }
}

impl TransactionDto {
    /// Validates and converts into a [`Transaction`].
    pub fn into_domain(self, mode: ValidationMode) -> Result<Transaction, ValidationError> {
        let id = TransactionId::new(self.id);
        let record = || format!("transaction {id}");

        let transaction_date = self
            .transaction_date
            .as_deref()
            .map(|s| parse_date("transactionDate", s))
            .transpose()?
            .ok_or_else(|| ValidationError::MissingField {
                record: record(),
                field: "transactionDate",
            })?;

        let txn = Transaction {
            id,
            transaction_number: self
                .transaction_number
                .unwrap_or_else(|| format!("#{id}")),
            transaction_type: self.transaction_type.parse()?,
            party_id: self.party_id.map(PartyId::new),
            amount: amount(mode, &record, "amount", self.amount.as_ref())?,
            balance_due: optional_decimal("balanceDue", self.balance_due.as_ref())?,
            transaction_date,
            due_date: optional_date("dueDate", self.due_date.as_deref())?,
            status: self.status.parse()?,
            is_bnpl: self.is_bnpl,
            notes: self.notes,
        };

        enforce(mode, check_transaction(&txn))?;
        Ok(txn)
    }
}

impl PartyDto {
    /// Validates and converts into a [`Party`].
    pub fn into_domain(self, mode: ValidationMode) -> Result<Party, ValidationError> {
        let party = Party {
            id: PartyId::new(self.id),
            name: self.name,
            party_type: self.party_type.parse()?,
            gstin: self.gstin.filter(|g| !g.trim().is_empty()),
            email: self.email,
            phone: self.phone,
            address: self.address,
            city: self.city,
            state: self.state,
            pincode: self.pincode,
            credit_limit: optional_decimal("creditLimit", self.credit_limit.as_ref())?,
            credit_period: self.credit_period,
        };

        enforce(mode, check_party(&party))?;
        Ok(party)
    }
}

impl BnplLimitDto {
    /// Validates and converts into a [`BnplLimit`].
    pub fn into_domain(self, mode: ValidationMode) -> Result<BnplLimit, ValidationError> {
        let id = LimitId::new(self.id);
        let record = || format!("limit {id}");

        let limit = BnplLimit {
            id,
            party_id: PartyId::new(self.party_id),
            limit_type: self.limit_type.parse()?,
            total_limit: amount(mode, &record, "totalLimit", self.total_limit.as_ref())?,
            used_limit: amount(mode, &record, "usedLimit", self.used_limit.as_ref())?,
            expiry_date: optional_date("expiryDate", self.expiry_date.as_deref())?,
            provider: self.provider,
        };

        enforce(mode, check_limit(&limit))?;
        Ok(limit)
    }
}

impl PartyRowDto {
    /// Validates and converts into a [`PartyRow`].
    pub fn into_domain(self, mode: ValidationMode) -> Result<PartyRow, ValidationError> {
        let party_id = PartyId::new(self.party_id);
        let record = || format!("rollup row for party {party_id}");

        Ok(PartyRow {
            party_id,
            party_name: self.party_name,
            total_due: amount(mode, &record, "totalDue", self.total_due.as_ref())?,
            overdue_amount: amount(mode, &record, "overdueAmount", self.overdue_amount.as_ref())?,
            invoice_count: self.invoice_count.unwrap_or_default(),
            last_payment_date: optional_date("lastPaymentDate", self.last_payment_date.as_deref())?,
            oldest_due_date: optional_date("oldestDueDate", self.oldest_due_date.as_deref())?,
            avg_collection_days: optional_decimal(
                "avgCollectionDays",
                self.avg_collection_days.as_ref(),
            )?,
        })
    }
}

impl AgeingDto {
    /// Converts into an [`AgeingSummary`]. The bundle carries no bucket
    /// counts, so they are left unknown.
    pub fn into_domain(
        self,
        mode: ValidationMode,
        side: &str,
    ) -> Result<AgeingSummary, ValidationError> {
        let record = || format!("{side} ageing");
        Ok(AgeingSummary::from_amounts(
            amount(mode, &record, "current", self.current.as_ref())?,
            amount(mode, &record, "days1to30", self.days1to30.as_ref())?,
            amount(mode, &record, "days31to60", self.days31to60.as_ref())?,
            amount(mode, &record, "days60plus", self.days60plus.as_ref())?,
        ))
    }
}

/// Converts a list, failing on the first invalid record.
pub fn convert_all<D, T>(
    items: Vec<D>,
    mode: ValidationMode,
    convert: impl Fn(D, ValidationMode) -> Result<T, ValidationError>,
) -> Result<Vec<T>, ValidationError> {
    items.into_iter().map(|item| convert(item, mode)).collect()
}
