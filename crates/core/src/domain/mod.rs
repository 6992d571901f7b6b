//! Records served by the accounting API.
//!
//! These are read-only from this crate's perspective: nothing here mutates
//! a record after it has been validated at the boundary.

pub mod limit;
pub mod party;
pub mod transaction;

pub use limit::{BnplLimit, LimitType};
pub use party::{Party, PartyType};
pub use transaction::{LedgerSide, Transaction, TransactionStatus, TransactionType};
