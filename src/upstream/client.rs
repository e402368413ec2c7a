//! HTTP client for the reward and airdrop endpoints.
//!
//! # Responsibilities
//! - Build a reqwest client carrying the fixed upstream header set
//! - Map an address to its endpoint URL
//! - Decode response bodies into typed envelopes

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::types::{
    AirdropRecord, ApiEnvelope, Lookup, QueryError, QueryResult, RewardRecord,
};

/// Client for the upstream reward/airdrop API.
#[derive(Clone)]
pub struct JagerClient {
    http: reqwest::Client,
    base_url: Url,
    success_code: i64,
}

impl JagerClient {
    /// Create a new client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> QueryResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| QueryError::InvalidUrl(format!("'{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(QueryError::InvalidUrl(format!(
                "'{}' cannot be used as a base",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        insert_header(&mut headers, ACCEPT, "accept", &config.accept)?;
        insert_header(&mut headers, ACCEPT_LANGUAGE, "accept-language", &config.accept_language)?;
        insert_header(&mut headers, ORIGIN, "origin", &config.origin)?;
        insert_header(&mut headers, REFERER, "referer", &config.referer)?;

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if config.no_proxy {
            builder = builder.no_proxy();
        }

        tracing::debug!(base_url = %base_url, "Upstream client initialized");

        Ok(Self {
            http: builder.build()?,
            base_url,
            success_code: config.success_code,
        })
    }

    /// Status code that marks a successful payload.
    pub fn success_code(&self) -> i64 {
        self.success_code
    }

    /// `GET /api/holder/queryReward/{address}`
    pub async fn query_reward(&self, address: &str) -> QueryResult<ApiEnvelope<RewardRecord>> {
        self.get_envelope(Lookup::Reward, address).await
    }

    /// `GET /api/airdrop/queryAirdrop/{address}`
    pub async fn query_airdrop(&self, address: &str) -> QueryResult<ApiEnvelope<AirdropRecord>> {
        self.get_envelope(Lookup::Airdrop, address).await
    }

    /// Endpoint URL for a lookup. The address becomes one percent-encoded
    /// path segment appended after any path already on the base URL.
    pub fn endpoint(&self, lookup: Lookup, address: &str) -> QueryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| QueryError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(lookup.path_segments())
            .push(address);
        Ok(url)
    }

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        lookup: Lookup,
        address: &str,
    ) -> QueryResult<ApiEnvelope<T>> {
        let url = self.endpoint(lookup, address)?;
        tracing::debug!(%lookup, address, url = %url, "Sending lookup");

        let transport = |source| QueryError::Transport {
            lookup,
            address: address.to_string(),
            source,
        };

        self.http
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(transport)?
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(transport)
    }
}

fn insert_header(
    headers: &mut HeaderMap,
    name: HeaderName,
    label: &'static str,
    value: &str,
) -> QueryResult<()> {
    let value = HeaderValue::from_str(value).map_err(|e| QueryError::InvalidHeader {
        name: label,
        reason: e.to_string(),
    })?;
    headers.insert(name, value);
    Ok(())
}

impl std::fmt::Debug for JagerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JagerClient")
            .field("base_url", &self.base_url.as_str())
            .field("success_code", &self.success_code)
            .finish()
    }
}
