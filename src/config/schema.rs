//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the query tool.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct QueryConfig {
    /// Upstream API host and request headers.
    pub upstream: UpstreamConfig,

    /// Batch pacing.
    pub batch: BatchConfig,

    /// Table rendering settings.
    pub display: DisplayConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Upstream API configuration.
///
/// The header values are what the upstream's access policy expects from a
/// browser session; they are sent verbatim on every lookup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the API host (e.g., "https://api.jager.meme").
    pub base_url: String,

    /// Application status code that marks a successful payload.
    pub success_code: i64,

    /// Request timeout in seconds. `None` keeps the HTTP client default.
    pub request_timeout_secs: Option<u64>,

    /// Ignore HTTP(S)_PROXY environment settings.
    pub no_proxy: bool,

    pub accept: String,
    pub accept_language: String,
    pub origin: String,
    pub referer: String,
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.jager.meme".to_string(),
            success_code: 200,
            request_timeout_secs: None,
            no_proxy: false,
            accept: "application/json".to_string(),
            accept_language: "zh-CN,zh;q=0.9".to_string(),
            origin: "https://jager.meme".to_string(),
            referer: "https://jager.meme/".to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36"
                .to_string(),
        }
    }
}

/// Batch pacing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Pause after each address in milliseconds.
    pub delay_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { delay_ms: 500 }
    }
}

/// Output format for result sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Two text tables (airdrop, rewards).
    #[default]
    Table,
    /// The result set as a JSON object keyed by address.
    Json,
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Output format.
    pub format: OutputFormat,

    /// Link target for wallet cells.
    pub referral_url: String,

    /// Wrap wallet cells in OSC 8 terminal hyperlinks.
    pub hyperlinks: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            referral_url: "https://jager.meme/?invitor=0x16B9d22B96fC77987820735D8904522655796245"
                .to_string(),
            hyperlinks: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
