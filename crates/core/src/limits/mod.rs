//! BNPL and credit limit utilization.

pub mod service;
pub mod types;

pub use service::LimitService;
pub use types::{ExpiryStatus, LimitUtilization};
