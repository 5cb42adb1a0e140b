//! HTTP implementation of the mod service endpoints
//!
//! Sends JSON POST requests to the three configured endpoints. A non-2xx
//! status or a transport failure is a [`ModforgeError::Service`]; when the
//! failure body carries `{"error": "..."}` that message is surfaced
//! verbatim, otherwise a generic fallback naming the operation is used.

use crate::config::ServiceConfig;
use crate::error::{ModforgeError, Result};
use crate::service::base::{
    ChatUpdateRequest, ChatUpdateResponse, GenerateRequest, GenerateResponse, ModService,
    PortRequest, PortResponse,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Error body the services return on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Client for the external generation, chat, and porting services
pub struct HttpModService {
    client: Client,
    config: ServiceConfig,
}

impl HttpModService {
    /// Create a new service client from endpoint configuration
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("modforge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ModforgeError::Service(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized mod service client: generate={}, chat={}, port={}",
            config.generate_url,
            config.chat_url,
            config.port_url
        );

        Ok(Self { client, config })
    }

    /// POST a JSON body and decode the JSON response
    ///
    /// `what` names the operation in fallback error messages.
    async fn post_json<B, T>(&self, url: &str, body: &B, what: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {} ({})", url, what);

        let response = self.client.post(url).json(body).send().await.map_err(|e| {
            tracing::warn!("{} request transport failure: {}", what, e);
            ModforgeError::Service(format!("Failed to reach the {} service: {}", what, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| format!("{} request failed with status {}", what, status));
            tracing::error!("{} service returned {}: {}", what, status, message);
            return Err(ModforgeError::Service(message).into());
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse {} response: {}", what, e);
            ModforgeError::Service(format!("Failed to parse {} response: {}", what, e)).into()
        })
    }
}

#[async_trait]
impl ModService for HttpModService {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        self.post_json(&self.config.generate_url, request, "generation")
            .await
    }

    async fn chat_update(&self, request: &ChatUpdateRequest) -> Result<ChatUpdateResponse> {
        self.post_json(&self.config.chat_url, request, "update").await
    }

    async fn port(&self, request: &PortRequest) -> Result<PortResponse> {
        self.post_json(&self.config.port_url, request, "porting").await
    }
}
