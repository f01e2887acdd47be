use crate::error::{AppError, Result};
use std::{env, str::FromStr, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server: ServerConfig {
                host: var("HOST", "0.0.0.0"),
                port: parse(&var("PORT", "5000"), "PORT")?,
                max_body_size: parse(&var("MAX_BODY_SIZE", "1048576"), "MAX_BODY_SIZE")?,
                request_timeout: Duration::from_secs(parse(
                    &var("REQUEST_TIMEOUT_SECS", "30"),
                    "REQUEST_TIMEOUT_SECS",
                )?),
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL", "sqlite://local.db"),
                max_connections: parse(&var("DB_MAX_CONNECTIONS", "5"), "DB_MAX_CONNECTIONS")?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("FRONTEND_URL")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse<T: FromStr>(value: &str, key: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::ConfigError(format!("Invalid {} value", key)))
}
