//! Terminal dashboard.
//!
//! # Data Flow
//! ```text
//! address block (arguments, file, stdin or interactive prompt)
//!     → state.rs (Dashboard::submit → BatchOrchestrator)
//!     → on success: displayed ResultSet replaced wholesale
//!     → render.rs (airdrop table + reward table, or JSON)
//!         using format.rs (K/M/B/T numbers, shortened addresses)
//! ```
//!
//! # Design Decisions
//! - Results are committed all at once; a failed run never shows partial rows
//! - Failed runs keep the previous results on display
//! - Rendering is pure: ResultSet → String

pub mod format;
pub mod render;
pub mod session;
pub mod state;

pub use format::{format_number, shorten_address};
pub use render::{render, RenderOptions};
pub use session::run_session;
pub use state::Dashboard;
