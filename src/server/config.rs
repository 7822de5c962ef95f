//! Environment driven application configuration.

use std::time::Duration;

use crate::server::error::config::ConfigError;

pub static DEFAULT_SCRAPE_BASE_URL: &str = "https://tennislink.usta.com/Leagues/Main";
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_SCRAPE_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub contact_email: String,
    pub database_url: String,
    pub jwt_secret: String,
    /// Host the stage URLs are built against
    pub scrape_base_url: String,
    /// Timeout applied to each outbound fetch
    pub scrape_timeout: Duration,
    pub bind_address: String,
    pub user_agent: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let contact_email = required("CONTACT_EMAIL")?;
        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let scrape_base_url = optional("SCRAPE_BASE_URL", DEFAULT_SCRAPE_BASE_URL);
        let bind_address = optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS);

        let scrape_timeout = match lookup("SCRAPE_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_SCRAPE_TIMEOUT_SECS),
        };

        if !scrape_base_url.starts_with("http://") && !scrape_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvValue {
                var: "SCRAPE_BASE_URL".to_string(),
                reason: format!("expected an http(s) URL, got {:?}", scrape_base_url),
            });
        }

        let user_agent = format!(
            "rallylink/{} ({}; +https://github.com/autumn-order/rallylink)",
            env!("CARGO_PKG_VERSION"),
            contact_email
        );

        Ok(Self {
            contact_email,
            database_url,
            jwt_secret,
            scrape_base_url,
            scrape_timeout,
            bind_address,
            user_agent,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: "SCRAPE_TIMEOUT_SECS".to_string(),
        reason,
    };

    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|e| invalid(format!("{}: {:?}", e, raw)))?;

    if secs == 0 {
        return Err(invalid("timeout must be greater than zero".to_string()));
    }

    Ok(Duration::from_secs(secs))
}
