//! Batch query subsystem.
//!
//! # Data Flow
//! ```text
//! raw address block
//!     → input.rs (split lines, trim, drop blanks)
//!     → orchestrator.rs, per address in order:
//!         reward + airdrop lookups (concurrent)
//!         → status code check
//!         → CombinedResult inserted into ResultSet
//!         → fixed delay
//!     → ResultSet (only when every address succeeded)
//! ```
//!
//! # Design Decisions
//! - First error aborts the batch; the partial set is dropped
//! - No retries or backoff, only the fixed delay
//! - Duplicate addresses are queried again and overwrite in place

pub mod input;
pub mod orchestrator;
pub mod results;

pub use input::normalize_addresses;
pub use orchestrator::BatchOrchestrator;
pub use results::{CombinedResult, ResultSet};
