//! Domain Layer
//!
//! Pure translation rules between the caller, the relay and the Tavus API.
//! No I/O happens here.

pub mod conversation;
pub mod errors;
pub mod payload;
pub mod secrets;

pub use conversation::{ConversationCreated, UpstreamResponse};
pub use errors::{ConfigError, RelayError};
pub use payload::{InboundRequest, OutboundPayload, FORWARDED_FIELDS};
pub use secrets::Secrets;
