//! Upstream payload types and error definitions.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Message used when a rejected payload carries no message of its own.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// The two lookups issued per address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    Reward,
    Airdrop,
}

impl Lookup {
    /// Path segments of the endpoint, before the address segment.
    pub fn path_segments(self) -> [&'static str; 3] {
        match self {
            Lookup::Reward => ["api", "holder", "queryReward"],
            Lookup::Airdrop => ["api", "airdrop", "queryAirdrop"],
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Reward => f.write_str("reward"),
            Lookup::Airdrop => f.write_str("airdrop"),
        }
    }
}

/// Errors that can occur while querying addresses.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Network failure, non-2xx status or a body that is not JSON.
    #[error("{lookup} lookup for {address} failed: {source}")]
    Transport {
        lookup: Lookup,
        address: String,
        #[source]
        source: reqwest::Error,
    },

    /// The payload arrived but its status code is not the success value.
    /// `code` is `None` when the body carried no usable code at all.
    #[error("{message}")]
    Rejected {
        lookup: Lookup,
        address: String,
        code: Option<i64>,
        message: String,
    },

    /// Success status, but `data` does not have the shape of the record.
    #[error("{lookup} lookup for {address} returned malformed data: {source}")]
    Decode {
        lookup: Lookup,
        address: String,
        #[source]
        source: serde_json::Error,
    },

    /// Success status without a data object.
    #[error("{lookup} lookup for {address} returned no data")]
    MissingData { lookup: Lookup, address: String },

    /// Nothing left to query after normalizing the input.
    #[error("no addresses to query")]
    NoAddresses,

    #[error("invalid upstream URL: {0}")]
    InvalidUrl(String),

    #[error("invalid value for header {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Response body shared by both endpoints.
///
/// Only `code` and `message` are read before the status check. `data` stays
/// raw JSON until the payload is known to be a success, so a rejected body
/// never fails on the shape of its `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound = "")]
pub struct ApiEnvelope<T> {
    #[serde(default, deserialize_with = "lenient_code")]
    pub code: Option<i64>,
    #[serde(default, alias = "msg", deserialize_with = "lenient_message")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(skip)]
    record: PhantomData<T>,
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    /// Unwrap the data object, rejecting any status other than `success_code`.
    pub fn into_data(self, success_code: i64, lookup: Lookup, address: &str) -> QueryResult<T> {
        if self.code != Some(success_code) {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            return Err(QueryError::Rejected {
                lookup,
                address: address.to_string(),
                code: self.code,
                message,
            });
        }
        let data = self.data.ok_or_else(|| QueryError::MissingData {
            lookup,
            address: address.to_string(),
        })?;
        serde_json::from_value(data).map_err(|source| QueryError::Decode {
            lookup,
            address: address.to_string(),
            source,
        })
    }
}

/// Status code as a number or a numeric string. Anything else reads as no code.
fn lenient_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericValue {
    Text(String),
    Number(serde_json::Number),
}

/// Accept a numeric field sent either as a JSON string or a JSON number.
/// `null` and missing fields become `"0"`.
fn numeric_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumericValue>::deserialize(deserializer)? {
        Some(NumericValue::Text(s)) => s,
        Some(NumericValue::Number(n)) => n.to_string(),
        None => "0".to_string(),
    })
}

/// Count sent as a JSON number or a numeric string. `null` and `""` become 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumericValue>::deserialize(deserializer)? {
        None => Ok(0),
        Some(NumericValue::Number(n)) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("invalid count {n}"))),
        Some(NumericValue::Text(s)) if s.trim().is_empty() => Ok(0),
        Some(NumericValue::Text(s)) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid count {s:?}"))),
    }
}

/// `null` reads as the type's default, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn zero() -> String {
    "0".to_string()
}

/// Holder reward balances for one address.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub balance: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub jager: String,
    #[serde(rename = "jagerBNB", default = "zero", deserialize_with = "numeric_string")]
    pub jager_bnb: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub pending_jager: String,
    #[serde(rename = "pendingJagerBNB", default = "zero", deserialize_with = "numeric_string")]
    pub pending_jager_bnb: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub total_received_jager: String,
    #[serde(rename = "totalReceivedJagerBNB", default = "zero", deserialize_with = "numeric_string")]
    pub total_received_jager_bnb: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub wait_alloc_jager: String,
    #[serde(rename = "waitAllocJagerBNB", default = "zero", deserialize_with = "numeric_string")]
    pub wait_alloc_jager_bnb: String,
}

/// Airdrop eligibility, claim status and the holder/volume metrics behind it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub claimed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub can_airdrop: bool,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub reward: String,
    #[serde(default)]
    pub solana_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub sub_count: u64,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub bsc_bnb_balance: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub bsc_four_meme_trading_vol: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub bsc_mubarak_holders: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub bsc_pancake_trading_vol: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub bs_tst_holders: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub eth_pepe_holders: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub sol_pumpfun_trading_vol: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub sol_ray_trading_vol: String,
    #[serde(default = "zero", deserialize_with = "numeric_string")]
    pub sol_trump_balance: String,
}
