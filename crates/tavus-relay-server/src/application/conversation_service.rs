//! Conversation Application Service (Use Case)
//!
//! Runs the relay pipeline: parse, compose, call upstream, translate.

use std::sync::Arc;

use tavus_relay::{
    ConversationApi, ConversationCreated, InboundRequest, OutboundPayload, RelayError, Secrets,
};

/// Application service for conversation creation
pub struct ConversationService<C: ConversationApi + ?Sized> {
    api: Arc<C>,
    secrets: Arc<Secrets>,
}

impl<C: ConversationApi + ?Sized> ConversationService<C> {
    pub fn new(api: Arc<C>, secrets: Arc<Secrets>) -> Self {
        Self { api, secrets }
    }

    /// Create a conversation from a raw caller body
    pub async fn create(&self, body: &[u8]) -> Result<ConversationCreated, RelayError> {
        let request = InboundRequest::parse(body)
            .inspect_err(|e| tracing::info!(error = %e, "Rejected request body"))?;

        let payload = OutboundPayload::compose(&self.secrets, &request);
        tracing::info!(
            fields = ?payload.forwarded_fields(),
            "Creating Tavus conversation"
        );

        let response = self
            .api
            .create_conversation(&payload)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Tavus API unreachable"))?;

        match ConversationCreated::from_upstream(response) {
            Ok(created) => {
                tracing::info!(
                    conversation_id = %created.conversation_id,
                    "Tavus conversation created"
                );
                Ok(created)
            }
            Err(e) => {
                if let RelayError::UpstreamRejected { status_code, .. } = &e {
                    tracing::warn!(status_code, "Tavus API rejected conversation request");
                } else {
                    tracing::error!(error = %e, "Tavus API returned an unusable response");
                }
                Err(e)
            }
        }
    }
}
