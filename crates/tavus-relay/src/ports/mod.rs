//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the relay reaches the outside world.
//!
//! Implementations of these traits live in the server crate.

pub mod conversation_api;

pub use conversation_api::ConversationApi;
