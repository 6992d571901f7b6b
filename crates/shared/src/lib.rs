//! Shared types, errors, and configuration for Ledgerdesk.
//!
//! This crate provides common types used across all other crates:
//! - Display currencies
//! - Typed IDs for records served by the accounting API
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
