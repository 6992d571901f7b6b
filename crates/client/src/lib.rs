//! REST client for the accounting API.
//!
//! Fetches transactions, parties, BNPL limits and the server-side rollups,
//! validates every record at the boundary and hands back domain types from
//! `ledgerdesk-core`. Also triggers Tally synchronisation.

pub mod client;
pub mod error;
pub mod wire;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use wire::{SyncOutcome, SyncType};
