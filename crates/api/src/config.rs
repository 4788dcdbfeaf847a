use skillkart_core::progress::RepeatCompletionPolicy;
use skillkart_core::xp::{validate_xp_reward, DEFAULT_XP_PER_STEP};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Step-completion reward settings.
    pub xp: XpSettings,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// See [`JwtConfig::from_env`] and [`XpSettings::from_env`] for the rest.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let xp = XpSettings::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            xp,
        }
    }
}

/// How step completions are rewarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpSettings {
    /// Points appended to the XP log per rewarded completion.
    pub points_per_step: i32,
    /// Whether re-completing an already completed step earns XP again.
    pub repeat_completion: RepeatCompletionPolicy,
}

impl Default for XpSettings {
    fn default() -> Self {
        Self {
            points_per_step: DEFAULT_XP_PER_STEP,
            repeat_completion: RepeatCompletionPolicy::default(),
        }
    }
}

impl XpSettings {
    /// Load XP settings from environment variables.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `XP_PER_STEP`          | `10`    |
    /// | `XP_REPEAT_COMPLETION` | `once`  |
    ///
    /// # Panics
    ///
    /// Panics if either value is present but invalid.
    pub fn from_env() -> Self {
        let points = std::env::var("XP_PER_STEP").ok();
        let policy = std::env::var("XP_REPEAT_COMPLETION").ok();
        Self::parse(points.as_deref(), policy.as_deref())
            .unwrap_or_else(|msg| panic!("Invalid XP configuration: {msg}"))
    }

    /// Build settings from optional raw values, applying defaults for `None`.
    pub fn parse(points: Option<&str>, policy: Option<&str>) -> Result<Self, String> {
        let points_per_step = match points {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|e| format!("XP_PER_STEP must be an integer: {e}"))?,
            None => DEFAULT_XP_PER_STEP,
        };
        validate_xp_reward(points_per_step)?;

        let repeat_completion = match policy {
            Some(raw) => RepeatCompletionPolicy::from_str_value(raw).map_err(|e| e.to_string())?,
            None => RepeatCompletionPolicy::default(),
        };

        Ok(Self {
            points_per_step,
            repeat_completion,
        })
    }
}
