//! Poll outcome, the height source seam and the `/status` wire types

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::FetchError;

/// Result of a single status query, consumed by the monitor in the same cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Height(u64),
    FetchError(FetchError),
}

impl From<Result<u64, FetchError>> for PollOutcome {
    fn from(result: Result<u64, FetchError>) -> Self {
        match result {
            Ok(height) => PollOutcome::Height(height),
            Err(e) => PollOutcome::FetchError(e),
        }
    }
}

/// Anything that can report a node's latest block height.
///
/// Implementations perform exactly one query per call and never retry.
/// Every failure must come back as [`PollOutcome::FetchError`].
#[async_trait]
pub trait HeightSource: Send + Sync {
    async fn fetch(&self) -> PollOutcome;
}

/// Tendermint JSON-RPC envelope returned by `/status`
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub result: Option<StatusResult>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusResult {
    #[serde(default)]
    pub sync_info: Option<SyncInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncInfo {
    #[serde(default)]
    pub latest_block_height: Option<BlockHeight>,
    #[serde(default)]
    pub catching_up: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Height as reported by the node. Tendermint sends a decimal string; some
/// proxies re-encode it as a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlockHeight {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl BlockHeight {
    /// Non-negative integer height, or the raw value that could not be used
    pub fn to_height(&self) -> Result<u64, FetchError> {
        let parsed = match self {
            BlockHeight::Text(s) => s.trim().parse::<u64>().ok(),
            BlockHeight::Number(n) => n.as_u64(),
            BlockHeight::Other(_) => None,
        };

        parsed.ok_or_else(|| FetchError::InvalidHeight {
            value: match self {
                BlockHeight::Text(s) => s.clone(),
                BlockHeight::Number(n) => n.to_string(),
                BlockHeight::Other(v) => v.to_string(),
            },
        })
    }
}
