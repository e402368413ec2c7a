//! Shared utilities for integration testing: a scriptable mock of the
//! reward/airdrop API.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

use jager_query::batch::BatchOrchestrator;
use jager_query::config::QueryConfig;
use jager_query::upstream::JagerClient;

/// How the mock answers one lookup.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Reply {
    /// `code: 200` with a data object.
    Success,
    /// Bare HTTP error status.
    HttpError(u16),
    /// HTTP 200 with a non-success application code.
    Rejected { code: i64, message: Option<String> },
    /// HTTP 200 with an arbitrary JSON body.
    Raw(serde_json::Value),
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub lookup: &'static str,
    pub address: String,
    pub headers: HeaderMap,
}

#[derive(Default)]
struct MockState {
    replies: HashMap<(&'static str, String), Reply>,
    calls: HashMap<String, u64>,
    requests: Vec<RecordedRequest>,
}

/// Mock upstream. Addresses without a scripted reply succeed.
///
/// Successful reward payloads carry the number of reward lookups made so far
/// for that address in `balance`, so tests can tell which lookup a result
/// came from.
#[derive(Clone, Default)]
pub struct MockUpstream {
    state: Arc<Mutex<MockState>>,
}

#[allow(dead_code)]
impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_reward(&self, address: &str, reply: Reply) {
        let mut state = self.state.lock().unwrap();
        state.replies.insert(("reward", address.to_string()), reply);
    }

    pub fn reply_airdrop(&self, address: &str, reply: Reply) {
        let mut state = self.state.lock().unwrap();
        state.replies.insert(("airdrop", address.to_string()), reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Addresses seen by one lookup, in arrival order.
    pub fn queried(&self, lookup: &str) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.lookup == lookup)
            .map(|r| r.address)
            .collect()
    }

    /// Serve on an ephemeral local port.
    pub async fn start(&self) -> SocketAddr {
        let app = Router::new()
            .route("/api/holder/queryReward/{address}", get(reward))
            .route("/api/airdrop/queryAirdrop/{address}", get(airdrop))
            .with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        addr
    }

    fn respond(&self, lookup: &'static str, address: String, headers: HeaderMap) -> Response {
        let (reply, calls) = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(RecordedRequest {
                lookup,
                address: address.clone(),
                headers,
            });
            let calls = if lookup == "reward" {
                let count = state.calls.entry(address.clone()).or_insert(0);
                *count += 1;
                *count
            } else {
                state.calls.get(&address).copied().unwrap_or(0)
            };
            let reply = state
                .replies
                .get(&(lookup, address.clone()))
                .cloned()
                .unwrap_or(Reply::Success);
            (reply, calls)
        };

        match reply {
            Reply::Success => {
                let data = if lookup == "reward" {
                    reward_data(&address, calls)
                } else {
                    airdrop_data(&address)
                };
                Json(json!({ "code": 200, "message": "success", "data": data })).into_response()
            }
            Reply::HttpError(status) => (
                StatusCode::from_u16(status).unwrap(),
                "upstream unavailable",
            )
                .into_response(),
            Reply::Rejected { code, message } => {
                Json(json!({ "code": code, "message": message, "data": null })).into_response()
            }
            Reply::Raw(body) => Json(body).into_response(),
        }
    }
}

async fn reward(
    State(mock): State<MockUpstream>,
    Path(address): Path<String>,
    headers: HeaderMap,
) -> Response {
    mock.respond("reward", address, headers)
}

async fn airdrop(
    State(mock): State<MockUpstream>,
    Path(address): Path<String>,
    headers: HeaderMap,
) -> Response {
    mock.respond("airdrop", address, headers)
}

fn reward_data(address: &str, calls: u64) -> serde_json::Value {
    json!({
        "address": address,
        "balance": calls.to_string(),
        "jager": "1500",
        "jagerBNB": "0.25",
        "pendingJager": 2500000000u64,
        "pendingJagerBNB": "999",
        "totalReceivedJager": "0",
        "totalReceivedJagerBNB": "0",
        "waitAllocJager": "0",
        "waitAllocJagerBNB": "0"
    })
}

fn airdrop_data(address: &str) -> serde_json::Value {
    json!({
        "address": address,
        "claimed": false,
        "canAirdrop": true,
        "reward": "1000000",
        "solanaAddress": "",
        "subCount": 0,
        "bscBnbBalance": "0.1",
        "bscFourMemeTradingVol": "0",
        "bscMubarakHolders": "0",
        "bscPancakeTradingVol": "0",
        "bsTstHolders": "0",
        "ethPepeHolders": "0",
        "solPumpfunTradingVol": "0",
        "solRayTradingVol": "0",
        "solTrumpBalance": "0"
    })
}

/// Configuration pointing at a mock upstream.
#[allow(dead_code)]
pub fn test_config(addr: SocketAddr, delay_ms: u64) -> QueryConfig {
    let mut config = QueryConfig::default();
    config.upstream.base_url = format!("http://{addr}");
    config.upstream.no_proxy = true;
    config.upstream.request_timeout_secs = Some(5);
    config.batch.delay_ms = delay_ms;
    config
}

#[allow(dead_code)]
pub fn orchestrator(addr: SocketAddr, delay_ms: u64) -> BatchOrchestrator {
    let config = test_config(addr, delay_ms);
    let client = JagerClient::new(&config.upstream).unwrap();
    BatchOrchestrator::new(client, &config.batch)
}
