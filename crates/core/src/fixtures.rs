//! Record builders shared by unit tests.

use chrono::{Days, NaiveDate};
use ledgerdesk_shared::types::{LimitId, PartyId, TransactionId};
use rust_decimal::Decimal;

use crate::domain::{
    BnplLimit, LimitType, Party, PartyType, Transaction, TransactionStatus, TransactionType,
};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

pub fn days_ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).unwrap()
}

pub fn days_ahead(n: u64) -> NaiveDate {
    today().checked_add_days(Days::new(n)).unwrap()
}

pub fn party(id: i64, name: &str, party_type: PartyType) -> Party {
    Party {
        id: PartyId::new(id),
        name: name.to_string(),
        party_type,
        gstin: None,
        email: None,
        phone: None,
        address: None,
        city: None,
        state: None,
        pincode: None,
        credit_limit: None,
        credit_period: None,
    }
}

pub fn document(
    id: i64,
    transaction_type: TransactionType,
    party: Option<i64>,
    balance_due: Option<Decimal>,
    status: TransactionStatus,
) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        transaction_number: format!("DOC-{id:04}"),
        transaction_type,
        party_id: party.map(PartyId::new),
        amount: balance_due.unwrap_or(Decimal::ZERO).max(Decimal::ONE_HUNDRED),
        balance_due,
        transaction_date: days_ago(30),
        due_date: None,
        status,
        is_bnpl: false,
        notes: None,
    }
}

pub fn invoice(
    id: i64,
    party: i64,
    balance_due: Decimal,
    status: TransactionStatus,
) -> Transaction {
    document(
        id,
        TransactionType::SalesInvoice,
        Some(party),
        Some(balance_due),
        status,
    )
}

pub fn bill(id: i64, party: i64, balance_due: Decimal, status: TransactionStatus) -> Transaction {
    document(
        id,
        TransactionType::PurchaseBill,
        Some(party),
        Some(balance_due),
        status,
    )
}

pub fn limit(id: i64, party: i64, total: Decimal, used: Decimal) -> BnplLimit {
    BnplLimit {
        id: LimitId::new(id),
        party_id: PartyId::new(party),
        limit_type: LimitType::Purchase,
        total_limit: total,
        used_limit: used,
        expiry_date: None,
        provider: None,
    }
}
