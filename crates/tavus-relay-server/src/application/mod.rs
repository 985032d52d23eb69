//! Application Layer (Use Cases)
//!
//! Coordinates the domain rules with the outbound Tavus client.

mod conversation_service;

pub use conversation_service::ConversationService;

#[cfg(test)]
pub(crate) use conversation_service::tests::{secrets, FakeConversationApi};
