//! Responsibility
//! - environment-based configuration (PORT, APP_ENV)
//! - validation at startup (invalid values fail the boot)
//!
//! POD_NAME is intentionally NOT part of `Config`: the greeting handler
//! reads it fresh on every request, so only the variable name lives here.

use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

/// Environment variable holding the orchestrator-assigned pod name.
pub const POD_NAME: &str = "POD_NAME";

const DEFAULT_PORT: u16 = 5173;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = match std::env::var("PORT") {
            Ok(s) => s.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => DEFAULT_PORT,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        Ok(Self { addr, app_env })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_5173() {
        assert_eq!(DEFAULT_PORT, 5173);
    }

    #[test]
    fn app_env_parses_known_values() {
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("PROD"), AppEnv::Production);
        assert_eq!(AppEnv::parse("development"), AppEnv::Development);
        assert_eq!(AppEnv::parse("anything-else"), AppEnv::Development);
    }
}
