//! Upstream API integration.
//!
//! # Data Flow
//! ```text
//! address
//!     → client.rs (endpoint URL, fixed headers, GET)
//!     → types.rs (ApiEnvelope<T>: code, message, raw data)
//!     → ApiEnvelope::into_data (status code check, then record decode)
//!     → RewardRecord / AirdropRecord
//! ```
//!
//! # Constraints
//! - Read-only GET requests
//! - No retries; transport timeout only when configured

pub mod client;
pub mod types;

pub use client::JagerClient;
pub use types::{AirdropRecord, ApiEnvelope, Lookup, QueryError, QueryResult, RewardRecord};
