//! Conversation API Port
//!
//! Abstract interface for the single outbound call the relay makes.

use async_trait::async_trait;

use crate::domain::{OutboundPayload, RelayError, UpstreamResponse};

/// Conversation creation interface
///
/// # Example
///
/// ```rust,ignore
/// use tavus_relay::ports::ConversationApi;
///
/// struct TavusClient { /* reqwest client */ }
///
/// #[async_trait]
/// impl ConversationApi for TavusClient {
///     async fn create_conversation(&self, payload: &OutboundPayload)
///         -> Result<UpstreamResponse, RelayError>
///     {
///         // POST with x-api-key, bounded by a timeout
///     }
/// }
/// ```
#[async_trait]
pub trait ConversationApi: Send + Sync {
    /// Send the payload upstream.
    ///
    /// Any HTTP status is `Ok`. Connection failures, timeouts and body read
    /// failures are `RelayError::UpstreamUnreachable`.
    async fn create_conversation(
        &self,
        payload: &OutboundPayload,
    ) -> Result<UpstreamResponse, RelayError>;
}
