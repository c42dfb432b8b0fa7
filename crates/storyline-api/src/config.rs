//! Environment-based configuration.

use crate::error::AppError;

/// Server configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// HS256 secret for session tokens.
    pub token_secret: String,
    /// Base URL of the upstream platform API.
    pub upstream_base_url: String,
    /// Origin allowed by CORS.
    pub allowed_origin: String,
    /// Session token lifetime in days.
    pub token_ttl_days: i64,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a required variable is missing, a
    /// numeric variable does not parse, or the token TTL is out of range.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = get("DATABASE_URL")
            .ok_or_else(|| AppError::Config("DATABASE_URL must be set".to_string()))?;
        let token_secret = get("TOKEN_SECRET")
            .ok_or_else(|| AppError::Config("TOKEN_SECRET must be set".to_string()))?;
        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = get("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let upstream_base_url =
            get("UPSTREAM_BASE_URL").unwrap_or_else(|| "https://api.nm-games.eu".to_string());
        let allowed_origin =
            get("ALLOWED_ORIGIN").unwrap_or_else(|| "http://localhost:5173".to_string());
        let token_ttl_days: i64 = get("TOKEN_TTL_DAYS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("TOKEN_TTL_DAYS must be an integer: {e}")))?;
        // Absurd TTLs would overflow the expiry arithmetic downstream.
        if !(1..=36500).contains(&token_ttl_days) {
            return Err(AppError::Config(
                "TOKEN_TTL_DAYS must be between 1 and 36500".to_string(),
            ));
        }

        Ok(Self {
            database_url,
            host,
            port,
            token_secret,
            upstream_base_url,
            allowed_origin,
            token_ttl_days,
        })
    }
}
