//! REST client for the strategy backend.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{BackendError, BackendResult};
use crate::models::{NewStrategy, Strategy};

/// The two calls the demo panel makes against the backend.
#[async_trait]
pub trait StrategyBackend: Send + Sync {
    async fn list_strategies(&self) -> BackendResult<Vec<Strategy>>;

    async fn create_strategy(&self, strategy: &NewStrategy) -> BackendResult<()>;
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> BackendResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: crate::config::normalize_base_url(base_url),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn strategies_url(&self) -> String {
        format!("{}/strategies", self.base_url)
    }
}

#[async_trait]
impl StrategyBackend for BackendClient {
    async fn list_strategies(&self) -> BackendResult<Vec<Strategy>> {
        let url = self.strategies_url();
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn create_strategy(&self, strategy: &NewStrategy) -> BackendResult<()> {
        let url = self.strategies_url();
        debug!("POST {} name={:?}", url, strategy.name);

        let response = self.client.post(&url).json(strategy).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        Ok(())
    }
}
