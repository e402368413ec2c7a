//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! orchestrator, upstream client, dashboard
//!     → tracing events with structured fields (run_id, address, lookup)
//!     → logging.rs subscriber
//!     → stderr (stdout is reserved for rendered tables)
//! ```
//!
//! # Design Decisions
//! - Structured logging through the tracing crate
//! - RUST_LOG overrides the configured level

pub mod logging;

pub use logging::init_logging;
