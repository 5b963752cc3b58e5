//! # Node Client
//!
//! Read-only HTTP access to the node's control API. Every call re-queries
//! the node live; there is no caching and no retry. No timeout is enforced
//! beyond reqwest's defaults, so callers wanting a bound must configure one
//! on the shared [`reqwest::Client`].

use crate::{
    config::Config,
    models::{
        BroadcastConfig,
        ContractAddresses,
        DelegatorInfo,
        TranscoderInfo,
    },
};
use eyre::Result;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

/// Sentinel shown for scalar fields that could not be fetched.
pub const UNKNOWN: &str = "Unknown";

/// Issues GET requests against `http://{host}:{http_port}` and decodes the
/// responses.
#[derive(Debug, Clone)]
pub struct NodeClient {
    http_client: HttpClient,
    base_url: String,
}

impl NodeClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: config.base_url(),
        }
    }

    /// GET `path` and return the body verbatim. Connection errors and
    /// non-2xx statuses surface as a single fetch-failed error.
    pub async fn fetch_text(&self, path: &str) -> Result<String> {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// GET `path` and decode the body as JSON.
    pub async fn fetch_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Cosmetic-tier fetch: a failed request or an empty body degrades to
    /// [`UNKNOWN`] without logging.
    pub async fn scalar(&self, path: &str) -> String {
        match self.fetch_text(path).await {
            Ok(body) if !body.is_empty() => body,
            _ => UNKNOWN.to_string(),
        }
    }

    pub async fn node_id(&self) -> String {
        self.scalar("/nodeID").await
    }

    pub async fn node_addrs(&self) -> String {
        self.scalar("/nodeAddrs").await
    }

    pub async fn eth_addr(&self) -> String {
        self.scalar("/ethAddr").await
    }

    pub async fn token_balance(&self) -> String {
        self.scalar("/tokenBalance").await
    }

    pub async fn eth_balance(&self) -> String {
        self.scalar("/ethBalance").await
    }

    pub async fn broadcaster_deposit(&self) -> String {
        self.scalar("/broadcasterDeposit").await
    }

    pub async fn contract_addresses(&self) -> Result<ContractAddresses> {
        self.fetch_json("/contractAddresses").await
    }

    pub async fn broadcast_config(&self) -> Result<BroadcastConfig> {
        self.fetch_json("/getBroadcastConfig").await
    }

    pub async fn transcoder_info(&self) -> Result<TranscoderInfo> {
        self.fetch_json("/transcoderInfo").await
    }

    pub async fn delegator_info(&self) -> Result<DelegatorInfo> {
        self.fetch_json("/delegatorInfo").await
    }
}
