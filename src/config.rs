use std::collections::HashMap;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: String,
    pub database_max_connections: u32,
    /// Number of entries returned by the audit log endpoint.
    pub audit_log_limit: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let host = env_map
            .get("HOST")
            .map(|s| s.as_str())
            .unwrap_or("0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|_| {
                ConfigError::InvalidValue("HOST".to_string(), "must be an IP address".to_string())
            })?;

        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("3000")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = match env_map.get("DATABASE_PATH").map(|s| s.trim()) {
            Some("") => return Err(ConfigError::MissingEnv("DATABASE_PATH".to_string())),
            Some(path) => path.to_string(),
            None => "content.db".to_string(),
        };

        let database_max_connections = env_map
            .get("DATABASE_MAX_CONNECTIONS")
            .map(|s| s.as_str())
            .unwrap_or("1")
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "DATABASE_MAX_CONNECTIONS".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        let audit_log_limit = env_map
            .get("AUDIT_LOG_LIMIT")
            .map(|s| s.as_str())
            .unwrap_or("50")
            .parse::<i64>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "AUDIT_LOG_LIMIT".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        Ok(Config {
            host,
            port,
            database_path,
            database_max_connections,
            audit_log_limit,
        })
    }
}
