//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables have development defaults, so the shop runs out of the box:
//!
//! - `SHOP_DATABASE_URL` - SQLite connection string (default: `sqlite:shop.db`)
//! - `SHOP_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOP_PORT` - Listen port (default: 5000)
//! - `SHOP_BASE_URL` - Public URL, used to decide on secure cookies
//!   (default: `http://localhost:5000`)
//! - `SHOP_ADMIN_USERNAME` - Admin login (default: `admin`)
//! - `SHOP_ADMIN_PASSWORD` - Admin password (default: `1234`)
//!
//! The admin credential pair is a placeholder trust boundary, not a real
//! authentication system: a single account, compared in plain text.

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shop application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// SQLite database connection URL
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the shop
    pub base_url: String,
    /// Admin panel credentials
    pub admin: AdminCredentials,
}

/// The single admin credential pair gating the dashboard.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    /// Admin login name
    pub username: String,
    /// Admin password (plain text on purpose; see module docs)
    pub password: SecretString,
}

impl AdminCredentials {
    /// Check a submitted credential pair against the configured one.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = SecretString::from(get_env_or_default(
            "SHOP_DATABASE_URL",
            "sqlite:shop.db",
        ));
        let host = get_env_or_default("SHOP_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOP_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SHOP_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOP_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("SHOP_BASE_URL", "http://localhost:5000");

        let admin = AdminCredentials {
            username: get_env_or_default("SHOP_ADMIN_USERNAME", "admin"),
            password: SecretString::from(get_env_or_default("SHOP_ADMIN_PASSWORD", "1234")),
        };

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            admin,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
