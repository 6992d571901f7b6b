//! Dashboard summary.
//!
//! This module provides:
//! - Receivables and payables ageing side by side
//! - BNPL limit utilization
//! - Recent documents

pub mod service;
pub mod types;

pub use service::DashboardService;
pub use types::{DashboardOptions, DashboardSummary};
