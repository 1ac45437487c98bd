//! Configuration management for the weight log client
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: WL__)

use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use weight_logs_shared::Session;

/// Base URL of the weight log service when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Application configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Weight log service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout. Unset means requests may wait forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Identity the host seeds into the form
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing)]
    pub token: Option<SecretString>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Session with the token exposed, ready to seed the form
    pub fn session(&self) -> Session {
        let token = self
            .token
            .as_ref()
            .map(|t| t.expose_secret().clone())
            .unwrap_or_default();
        Session::new(self.user_id.clone(), token)
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with WL__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., WL__API__BASE_URL=http://host:9000 sets api.base_url
            .add_source(config::Environment::with_prefix("WL").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout(), None);
        assert_eq!(config.session.session(), Session::default());
    }

    #[test]
    fn test_session_exposes_token() {
        let session = SessionConfig {
            user_id: "42".to_string(),
            token: Some(SecretString::new("abc".to_string())),
        };
        assert_eq!(session.session(), Session::new("42", "abc"));
        assert!(!format!("{:?}", session).contains("abc"));
    }

    #[test]
    fn test_timeout_conversion() {
        let api = ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: Some(5),
        };
        assert_eq!(api.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
