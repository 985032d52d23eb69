//! Domain Errors
//!
//! Error types for relay operations and startup configuration.

use serde_json::{json, Value};
use thiserror::Error;

/// Errors that terminate a single relay request.
///
/// Every variant maps to an HTTP status and a JSON body with an `error`
/// field. None of them carry the API key.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid JSON in request body: {0}")]
    InvalidRequestBody(String),

    #[error("Failed to read request body: {details}")]
    UnreadableRequestBody { status_code: u16, details: String },

    #[error("Failed to contact Tavus API: {0}")]
    UpstreamUnreachable(String),

    #[error("Tavus API error: status {status_code}")]
    UpstreamRejected { status_code: u16, body: String },

    #[error("Invalid response from Tavus API")]
    UpstreamContractViolation { details: Value },

    #[error("Not Found")]
    NotFound,
}

impl RelayError {
    /// HTTP status the caller receives for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequestBody(_) => 400,
            Self::UnreadableRequestBody { status_code, .. } => *status_code,
            Self::UpstreamUnreachable(_) => 502,
            Self::UpstreamRejected { status_code, .. } => *status_code,
            Self::UpstreamContractViolation { .. } => 500,
            Self::NotFound => 404,
        }
    }

    /// JSON body the caller receives for this error
    pub fn to_body(&self) -> Value {
        match self {
            Self::InvalidRequestBody(details) => json!({
                "error": "Invalid JSON in request body",
                "details": details,
            }),
            Self::UnreadableRequestBody { details, .. } => json!({
                "error": "Failed to read request body",
                "details": details,
            }),
            Self::UpstreamUnreachable(details) => json!({
                "error": "Failed to contact Tavus API",
                "details": details,
            }),
            Self::UpstreamRejected { status_code, body } => json!({
                "error": "Tavus API error",
                "status_code": status_code,
                "details": body,
            }),
            Self::UpstreamContractViolation { details } => json!({
                "error": "Invalid response from Tavus API",
                "details": details,
            }),
            Self::NotFound => json!({ "error": "Not Found" }),
        }
    }
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid<T: AsRef<str>>(key: &'static str, value: &str, reason: T) -> Self {
        Self::Invalid {
            key,
            value: value.to_string(),
            reason: reason.as_ref().to_string(),
        }
    }
}
