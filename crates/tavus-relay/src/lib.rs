//! Tavus Relay Domain Library
//!
//! Core types for relaying conversation-creation requests to the Tavus API.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): request translation rules
//!   - `secrets`: server-side credentials loaded once at startup
//!   - `payload`: inbound body parsing and the field allow-list
//!   - `conversation`: translation of the upstream reply for the caller
//!   - `errors`: relay and configuration error types
//!
//! - **Ports** (`ports/`): the outbound conversation API interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use tavus_relay::{ConversationCreated, InboundRequest, OutboundPayload, Secrets};
//!
//! let request = InboundRequest::parse(body)?;
//! let payload = OutboundPayload::compose(&secrets, &request);
//! let reply = api.create_conversation(&payload).await?;
//! let created = ConversationCreated::from_upstream(reply)?;
//! ```

pub mod domain;
pub mod ports;

pub use domain::{
    ConfigError, ConversationCreated, InboundRequest, OutboundPayload, RelayError, Secrets,
    UpstreamResponse, FORWARDED_FIELDS,
};
pub use ports::ConversationApi;
