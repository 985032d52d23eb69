//! Infrastructure Adapters
//!
//! Concrete implementations of the relay's ports.

mod tavus;

pub use tavus::TavusClient;
