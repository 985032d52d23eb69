//! Tavus API client
//!
//! Creates conversations on the Tavus API using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use tavus_relay::{ConversationApi, OutboundPayload, RelayError, UpstreamResponse};

/// HTTP implementation of ConversationApi
pub struct TavusClient {
    client: Client,
    endpoint: String,
    api_key: SecretString,
    timeout: Duration,
}

impl TavusClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tavus-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn describe(&self, err: reqwest::Error) -> RelayError {
        if err.is_timeout() {
            RelayError::UpstreamUnreachable(format!(
                "request timed out after {}s",
                self.timeout.as_secs_f64()
            ))
        } else {
            RelayError::UpstreamUnreachable(err.to_string())
        }
    }
}

#[async_trait]
impl ConversationApi for TavusClient {
    async fn create_conversation(
        &self,
        payload: &OutboundPayload,
    ) -> Result<UpstreamResponse, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", self.api_key.expose_secret().as_str())
            .json(payload)
            .send()
            .await
            .map_err(|e| self.describe(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.describe(e))?;

        tracing::debug!(status, body_len = body.len(), "Tavus API responded");

        Ok(UpstreamResponse::new(status, body))
    }
}
