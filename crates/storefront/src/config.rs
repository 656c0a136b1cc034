//! Storefront configuration loaded from environment variables.
//!
//! Every variable has a sensible default so the demo runs with no
//! configuration at all. A `.env` file is honored when present.
//!
//! ## Optional
//! - `STOREFRONT_HOST`: Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT`: Bind port (default: 3000)
//! - `STOREFRONT_BASE_URL`: Public URL of the storefront (default: <http://localhost:3000>)

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront server configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Address the HTTP server binds to.
    pub host: IpAddr,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Public base URL, used to decide cookie security attributes.
    pub base_url: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first if one exists. Missing variables fall
    /// back to defaults; present but malformed values are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        let _ = dotenvy::dotenv();

        let host = parse_env_or("STOREFRONT_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?;
        let port = parse_env_or("STOREFRONT_PORT", 3000)?;
        let base_url =
            env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        Ok(Self {
            host,
            port,
            base_url,
        })
    }

    /// The socket address to bind the HTTP server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    ///
    /// Session cookies are only marked `Secure` when this is true, so
    /// the demo still works over plain HTTP on localhost.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Parse an environment variable, falling back to a default when unset.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string(), raw)),
        Err(_) => Ok(default),
    }
}
