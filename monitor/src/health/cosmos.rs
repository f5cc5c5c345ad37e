//! Cosmos SDK node height source over the Tendermint `/status` endpoint

use super::types::{HeightSource, PollOutcome, StatusResponse};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::debug;

use crate::config::NodeConfig;
use crate::errors::FetchError;

const HEIGHT_FIELD: &str = "result.sync_info.latest_block_height";

pub struct CosmosHeightSource {
    client: HttpClient,
    status_url: String,
}

impl CosmosHeightSource {
    pub fn new(node_config: &NodeConfig) -> Result<Self, reqwest::Error> {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(node_config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            status_url: node_config.status_url(),
        })
    }

    pub fn status_url(&self) -> &str {
        &self.status_url
    }

    /// Query the node once and return its self-reported latest block height
    pub async fn fetch_height(&self) -> Result<u64, FetchError> {
        let response = self
            .client
            .get(&self.status_url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus {
                url: self.status_url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        parse_status_body(&body)
    }

    fn transport_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: self.status_url.clone(),
            }
        } else {
            FetchError::ConnectionFailed {
                url: self.status_url.clone(),
                reason: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl HeightSource for CosmosHeightSource {
    async fn fetch(&self) -> PollOutcome {
        self.fetch_height().await.into()
    }
}

/// Extract `result.sync_info.latest_block_height` from a `/status` body
pub fn parse_status_body(body: &str) -> Result<u64, FetchError> {
    let response: StatusResponse =
        serde_json::from_str(body).map_err(|e| FetchError::InvalidBody {
            reason: e.to_string(),
        })?;

    if let Some(error) = response.error {
        return Err(FetchError::Rpc {
            code: error.code,
            message: error
                .message
                .or_else(|| error.data.map(|data| data.to_string()))
                .unwrap_or_else(|| "unknown RPC error".to_string()),
        });
    }

    let sync_info = response
        .result
        .and_then(|result| result.sync_info)
        .ok_or_else(missing_height)?;

    if let Some(catching_up) = sync_info.catching_up {
        debug!("Node catching_up = {}", catching_up);
    }

    sync_info
        .latest_block_height
        .ok_or_else(missing_height)?
        .to_height()
}

fn missing_height() -> FetchError {
    FetchError::MissingField {
        field: HEIGHT_FIELD.to_string(),
    }
}
