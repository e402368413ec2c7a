//! Batch reward and airdrop lookup for Jager wallet addresses.

pub mod batch;
pub mod config;
pub mod dashboard;
pub mod observability;
pub mod upstream;

pub use batch::{BatchOrchestrator, CombinedResult, ResultSet};
pub use config::QueryConfig;
pub use dashboard::Dashboard;
pub use upstream::{JagerClient, QueryError};
