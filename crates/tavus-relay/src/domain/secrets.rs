//! Server-side secrets
//!
//! Loaded once at startup and shared read-only across requests.

use secrecy::SecretString;

use super::errors::ConfigError;

/// Credentials merged into every outbound request.
///
/// `Debug` output redacts the API key.
#[derive(Debug, Clone)]
pub struct Secrets {
    api_key: SecretString,
    persona_id: String,
    replica_id: Option<String>,
}

impl Secrets {
    /// Build secrets, treating empty values as absent.
    pub fn new(
        api_key: Option<String>,
        persona_id: Option<String>,
        replica_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = non_empty(api_key).ok_or(ConfigError::Missing("TAVUS_API_KEY"))?;
        let persona_id = non_empty(persona_id).ok_or(ConfigError::Missing("PERSONA_ID"))?;

        Ok(Self {
            api_key: SecretString::new(api_key),
            persona_id,
            replica_id: non_empty(replica_id),
        })
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn persona_id(&self) -> &str {
        &self.persona_id
    }

    pub fn replica_id(&self) -> Option<&str> {
        self.replica_id.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
