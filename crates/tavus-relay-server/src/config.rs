//! Relay configuration
//!
//! Read from environment variables (after `.env` is loaded by `main`).

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tavus_relay::{ConfigError, Secrets};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_RELAY_PATH: &str = "/create-conversation";
pub const DEFAULT_TAVUS_API_URL: &str = "https://tavusapi.com/v2/conversations";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process-wide configuration, built once at startup
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    /// Path that accepts POST requests
    pub relay_path: String,
    /// Tavus conversations endpoint
    pub tavus_api_url: String,
    /// Upper bound for the outbound call
    pub timeout: Duration,
    pub secrets: Secrets,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secrets = Secrets::new(
            lookup("TAVUS_API_KEY"),
            lookup("PERSONA_ID"),
            lookup("REPLICA_ID"),
        )?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("PORT", &raw, e.to_string()))?,
            None => DEFAULT_PORT,
        };

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let relay_path = lookup("RELAY_PATH").unwrap_or_else(|| DEFAULT_RELAY_PATH.to_string());
        if !relay_path.starts_with('/') {
            return Err(ConfigError::invalid(
                "RELAY_PATH",
                &relay_path,
                "must start with '/'",
            ));
        }

        let tavus_api_url =
            lookup("TAVUS_API_URL").unwrap_or_else(|| DEFAULT_TAVUS_API_URL.to_string());
        if !(tavus_api_url.starts_with("https://") || tavus_api_url.starts_with("http://")) {
            return Err(ConfigError::invalid(
                "TAVUS_API_URL",
                &tavus_api_url,
                "must be an http(s) URL",
            ));
        }

        let timeout_secs = match lookup("TAVUS_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::invalid(
                        "TAVUS_TIMEOUT_SECS",
                        &raw,
                        "must be greater than zero",
                    ))
                }
                Ok(secs) => secs,
                Err(e) => return Err(ConfigError::invalid("TAVUS_TIMEOUT_SECS", &raw, e.to_string())),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            port,
            relay_path,
            tavus_api_url,
            timeout: Duration::from_secs(timeout_secs),
            secrets,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::invalid("HOST", &self.host, "not a valid IP address"))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
