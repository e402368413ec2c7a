//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check URLs parse and use an HTTP scheme
//! - Check header values can be sent on the wire
//! - Check the log level is one the filter understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: QueryConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use reqwest::header::HeaderValue;
use thiserror::Error;
use url::Url;

use crate::config::schema::QueryConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream.base_url '{url}' is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("upstream.{field} is not a valid header value")]
    InvalidHeader { field: &'static str },

    #[error("upstream.{field} must not be empty")]
    EmptyHeader { field: &'static str },

    #[error("upstream.request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("display.referral_url '{0}' is not a valid URL")]
    InvalidReferralUrl(String),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error, off")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &QueryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let upstream = &config.upstream;

    match Url::parse(&upstream.base_url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::InvalidBaseUrl {
                url: upstream.base_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: upstream.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    let headers = [
        ("accept", &upstream.accept),
        ("accept_language", &upstream.accept_language),
        ("origin", &upstream.origin),
        ("referer", &upstream.referer),
        ("user_agent", &upstream.user_agent),
    ];
    for (field, value) in headers {
        if value.trim().is_empty() {
            errors.push(ValidationError::EmptyHeader { field });
        } else if HeaderValue::from_str(value).is_err() {
            errors.push(ValidationError::InvalidHeader { field });
        }
    }

    if upstream.request_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if Url::parse(&config.display.referral_url).is_err() {
        errors.push(ValidationError::InvalidReferralUrl(
            config.display.referral_url.clone(),
        ));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
