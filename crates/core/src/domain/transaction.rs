//! Sales and purchase documents.

use chrono::NaiveDate;
use ledgerdesk_shared::types::{PartyId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Document kind, as tagged by the accounting API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Sales invoice raised to a customer.
    SalesInvoice,
    /// Customer order, not yet invoiced.
    SalesOrder,
    /// Goods returned by a customer.
    SalesReturn,
    /// Bill received from a vendor.
    PurchaseBill,
    /// Order placed with a vendor.
    PurchaseOrder,
    /// Goods returned to a vendor.
    PurchaseReturn,
    /// Money received from a customer.
    Receipt,
    /// Money paid to a vendor.
    Payment,
    /// Estimate sent to a customer.
    Estimate,
    /// Quotation sent to or received from a party.
    Quotation,
    /// Delivery note accompanying dispatched goods.
    DeliveryNote,
    /// Credit note.
    CreditNote,
    /// Debit note.
    DebitNote,
    /// Goods received note.
    Grn,
    /// Direct expense.
    Expense,
}

impl TransactionType {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::SalesInvoice,
        Self::SalesOrder,
        Self::SalesReturn,
        Self::PurchaseBill,
        Self::PurchaseOrder,
        Self::PurchaseReturn,
        Self::Receipt,
        Self::Payment,
        Self::Estimate,
        Self::Quotation,
        Self::DeliveryNote,
        Self::CreditNote,
        Self::DebitNote,
        Self::Grn,
        Self::Expense,
    ];

    /// Wire tag for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SalesInvoice => "sales_invoice",
            Self::SalesOrder => "sales_order",
            Self::SalesReturn => "sales_return",
            Self::PurchaseBill => "purchase_bill",
            Self::PurchaseOrder => "purchase_order",
            Self::PurchaseReturn => "purchase_return",
            Self::Receipt => "receipt",
            Self::Payment => "payment",
            Self::Estimate => "estimate",
            Self::Quotation => "quotation",
            Self::DeliveryNote => "delivery_note",
            Self::CreditNote => "credit_note",
            Self::DebitNote => "debit_note",
            Self::Grn => "grn",
            Self::Expense => "expense",
        }
    }

    /// The ledger side this document creates a balance on, if any.
    #[must_use]
    pub const fn side(self) -> Option<LedgerSide> {
        match self {
            Self::SalesInvoice => Some(LedgerSide::Receivable),
            Self::PurchaseBill => Some(LedgerSide::Payable),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownTag {
                field: "transactionType",
                value: s.to_string(),
            })
    }
}

/// Document status, as tagged by the accounting API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Not yet issued.
    Draft,
    /// Issued and awaiting settlement.
    Pending,
    /// Approved internally.
    Approved,
    /// Fulfilled.
    Completed,
    /// Fully settled.
    Paid,
    /// Flagged overdue by the backend.
    Overdue,
    /// Voided.
    Cancelled,
    /// Settled in part.
    PartiallyPaid,
    /// Financed under a BNPL arrangement.
    UsingBnpl,
    /// Open order or quotation.
    Open,
    /// Closed order or quotation.
    Closed,
    /// Sent to the party.
    Sent,
    /// Party has responded.
    Responded,
    /// Purchase order placed.
    Ordered,
    /// Goods received.
    Received,
    /// Goods delivered.
    Delivered,
    /// Order invoiced.
    Invoiced,
    /// Estimate or quotation converted into an order or invoice.
    Converted,
    /// Quotation accepted.
    Accepted,
    /// Quotation rejected.
    Rejected,
    /// Quotation or estimate lapsed.
    Expired,
}

impl TransactionStatus {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 21] = [
        Self::Draft,
        Self::Pending,
        Self::Approved,
        Self::Completed,
        Self::Paid,
        Self::Overdue,
        Self::Cancelled,
        Self::PartiallyPaid,
        Self::UsingBnpl,
        Self::Open,
        Self::Closed,
        Self::Sent,
        Self::Responded,
        Self::Ordered,
        Self::Received,
        Self::Delivered,
        Self::Invoiced,
        Self::Converted,
        Self::Accepted,
        Self::Rejected,
        Self::Expired,
    ];

    /// Wire tag for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Completed => "completed",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
            Self::PartiallyPaid => "partially_paid",
            Self::UsingBnpl => "using_bnpl",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Sent => "sent",
            Self::Responded => "responded",
            Self::Ordered => "ordered",
            Self::Received => "received",
            Self::Delivered => "delivered",
            Self::Invoiced => "invoiced",
            Self::Converted => "converted",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }

    /// Whether a document in this status still counts as owed in party rollups.
    ///
    /// This is an allow-list. `UsingBnpl` and `Sent` are deliberately absent.
    #[must_use]
    pub const fn is_open_for_rollup(self) -> bool {
        matches!(self, Self::Pending | Self::Overdue | Self::PartiallyPaid)
    }

    /// Whether the document never became a real obligation.
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Draft | Self::Cancelled)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownTag {
                field: "status",
                value: s.to_string(),
            })
    }
}

/// Which side of the books a balance sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerSide {
    /// Owed to us by customers.
    Receivable,
    /// Owed by us to vendors.
    Payable,
}

impl LedgerSide {
    /// Document type that creates balances on this side.
    #[must_use]
    pub const fn document_type(self) -> TransactionType {
        match self {
            Self::Receivable => TransactionType::SalesInvoice,
            Self::Payable => TransactionType::PurchaseBill,
        }
    }

    /// Document type that settles balances on this side.
    #[must_use]
    pub const fn settlement_type(self) -> TransactionType {
        match self {
            Self::Receivable => TransactionType::Receipt,
            Self::Payable => TransactionType::Payment,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Receivable => "Receivables",
            Self::Payable => "Payables",
        }
    }
}

/// A sales or purchase document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Document number shown to users (e.g. "INV-0042").
    pub transaction_number: String,
    /// Document kind.
    pub transaction_type: TransactionType,
    /// Counter-party, if attributed.
    pub party_id: Option<PartyId>,
    /// Total value, non-negative.
    pub amount: Decimal,
    /// Unpaid remainder; `None` means settled or not applicable.
    pub balance_due: Option<Decimal>,
    /// Issuance date.
    pub transaction_date: NaiveDate,
    /// Date after which the document is overdue.
    pub due_date: Option<NaiveDate>,
    /// Stored status.
    pub status: TransactionStatus,
    /// Financed under a BNPL arrangement.
    pub is_bnpl: bool,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl Transaction {
    /// Outstanding balance, with an absent `balance_due` read as zero.
    #[must_use]
    pub fn outstanding(&self) -> Decimal {
        self.balance_due.unwrap_or(Decimal::ZERO)
    }

    /// Whether this document carries a positive balance on `side`.
    #[must_use]
    pub fn is_open_on(&self, side: LedgerSide) -> bool {
        self.transaction_type.side() == Some(side)
            && !self.status.is_void()
            && self.outstanding() > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn invoice(balance_due: Option<Decimal>, status: TransactionStatus) -> Transaction {
        Transaction {
            id: TransactionId::new(1),
            transaction_number: "INV-0001".to_string(),
            transaction_type: TransactionType::SalesInvoice,
            party_id: Some(PartyId::new(1)),
            amount: dec!(1000),
            balance_due,
            transaction_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            due_date: None,
            status,
            is_bnpl: false,
            notes: None,
        }
    }

    #[test]
    fn test_type_tags_roundtrip() {
        for t in TransactionType::ALL {
            assert_eq!(TransactionType::from_str(t.as_str()).unwrap(), t);
        }
        assert!(TransactionType::from_str("sales invoice").is_err());
    }

    #[test]
    fn test_status_tags_roundtrip() {
        for s in TransactionStatus::ALL {
            assert_eq!(TransactionStatus::from_str(s.as_str()).unwrap(), s);
        }
        assert!(matches!(
            TransactionStatus::from_str("PAID"),
            Err(ValidationError::UnknownTag { field: "status", .. })
        ));
    }

    #[test]
    fn test_rollup_allow_list() {
        let open: Vec<_> = TransactionStatus::ALL
            .into_iter()
            .filter(|s| s.is_open_for_rollup())
            .collect();
        assert_eq!(
            open,
            vec![
                TransactionStatus::Pending,
                TransactionStatus::Overdue,
                TransactionStatus::PartiallyPaid
            ]
        );
    }

    #[test]
    fn test_side_mapping() {
        assert_eq!(
            TransactionType::SalesInvoice.side(),
            Some(LedgerSide::Receivable)
        );
        assert_eq!(TransactionType::PurchaseBill.side(), Some(LedgerSide::Payable));
        assert_eq!(TransactionType::Receipt.side(), None);
        assert_eq!(LedgerSide::Payable.settlement_type(), TransactionType::Payment);
    }

    #[test]
    fn test_outstanding_defaults_to_zero() {
        assert_eq!(invoice(None, TransactionStatus::Paid).outstanding(), Decimal::ZERO);
        assert_eq!(
            invoice(Some(dec!(250.50)), TransactionStatus::Pending).outstanding(),
            dec!(250.50)
        );
    }

    #[test]
    fn test_is_open_on_side() {
        let pending = invoice(Some(dec!(10)), TransactionStatus::Pending);
        assert!(pending.is_open_on(LedgerSide::Receivable));
        assert!(!pending.is_open_on(LedgerSide::Payable));
        assert!(
            !invoice(Some(dec!(10)), TransactionStatus::Cancelled)
                .is_open_on(LedgerSide::Receivable)
        );
        assert!(
            !invoice(Some(dec!(0)), TransactionStatus::Pending).is_open_on(LedgerSide::Receivable)
        );
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(
            serde_json::to_string(&TransactionStatus::PartiallyPaid).unwrap(),
            "\"partially_paid\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::DeliveryNote).unwrap(),
            "\"delivery_note\""
        );
    }
}
