//! Server configuration.
//!
//! Everything is read from the environment once at startup. Only
//! `JWT_SECRET` is required; the rest defaults to values suitable for local
//! development.

use crate::auth::jwt::JwtConfig;

/// Name of the cookie that mirrors the access token for the page gate.
pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address. `HOST`, default `0.0.0.0`.
    pub host: String,
    /// Bind port. `PORT`, default `3000`.
    pub port: u16,
    /// Allowed CORS origins. `CORS_ORIGINS`, comma-separated, default
    /// `http://localhost:5173`.
    pub cors_origins: Vec<String>,
    /// Per-request timeout. `REQUEST_TIMEOUT_SECS`, default `30`.
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "3000")
                .parse()
                .expect("PORT must be a valid u16"),
            cors_origins: env_or("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30")
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a valid u64"),
            jwt: JwtConfig::from_env(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
