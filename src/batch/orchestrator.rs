//! Sequential batch runner.
//!
//! # Responsibilities
//! - Visit addresses strictly in input order
//! - Issue the reward and airdrop lookups for one address concurrently
//! - Stop at the first transport or application error
//! - Pause a fixed delay after every address

use std::time::Duration;

use tracing::Instrument;
use uuid::Uuid;

use crate::batch::input::normalize_addresses;
use crate::batch::results::{CombinedResult, ResultSet};
use crate::config::BatchConfig;
use crate::upstream::types::{Lookup, QueryError, QueryResult};
use crate::upstream::JagerClient;

/// Runs address batches against the upstream API.
#[derive(Debug, Clone)]
pub struct BatchOrchestrator {
    client: JagerClient,
    delay: Duration,
}

impl BatchOrchestrator {
    pub fn new(client: JagerClient, config: &BatchConfig) -> Self {
        Self {
            client,
            delay: Duration::from_millis(config.delay_ms),
        }
    }

    /// Pause applied after each address.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Normalize a raw address block and query every address in it.
    pub async fn run(&self, raw: &str) -> QueryResult<ResultSet> {
        let addresses = normalize_addresses(raw);
        if addresses.is_empty() {
            return Err(QueryError::NoAddresses);
        }
        self.run_addresses(&addresses).await
    }

    /// Query already-normalized addresses.
    ///
    /// Either every address succeeds and the full set is returned, or the
    /// first failure is returned and nothing gathered so far escapes.
    pub async fn run_addresses(&self, addresses: &[String]) -> QueryResult<ResultSet> {
        if addresses.is_empty() {
            return Err(QueryError::NoAddresses);
        }

        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("batch", %run_id, total = addresses.len());

        async move {
            let mut results = ResultSet::new();
            for (position, address) in addresses.iter().enumerate() {
                tracing::info!(address = %address, position = position + 1, "Querying address");

                let result = match self.query_address(address).await {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::error!(address = %address, error = %e, "Query failed, aborting batch");
                        return Err(e);
                    }
                };
                results.insert(address.clone(), result);

                tokio::time::sleep(self.delay).await;
            }

            tracing::info!(distinct = results.len(), "Batch complete");
            Ok(results)
        }
        .instrument(span)
        .await
    }

    /// Run both lookups for one address and merge them.
    pub async fn query_address(&self, address: &str) -> QueryResult<CombinedResult> {
        let (reward, airdrop) = tokio::try_join!(
            self.client.query_reward(address),
            self.client.query_airdrop(address)
        )?;

        let success = self.client.success_code();
        let reward = reward.into_data(success, Lookup::Reward, address)?;
        let airdrop = airdrop.into_data(success, Lookup::Airdrop, address)?;

        Ok(CombinedResult::new(reward, airdrop))
    }
}
