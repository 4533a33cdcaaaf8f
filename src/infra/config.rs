//! Centralized configuration (environment variables + defaults).
//!
//! Database settings are not validated here. Missing values fall back to empty strings and only
//! show up later as connection failures in the log.

use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// HTTP listen port (`PORT`).
    pub port: u16,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// Full connection URL (`DATABASE_URL`). Overrides the discrete fields when set.
    pub url: Option<String>,
    pub server: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// `DB_ENCRYPT`: require TLS to the server.
    pub encrypt: bool,
    /// `DB_TRUST_SERVER_CERTIFICATE`: accept the server certificate without verifying it.
    pub trust_server_certificate: bool,
    pub pool_max: u32,
    pub pool_min: u32,
    pub idle_timeout: Duration,
    /// `DB_ENSURE_SCHEMA`: create the `products` table at startup if it is missing.
    pub ensure_schema: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            server: "localhost".to_string(),
            port: 5432,
            user: String::new(),
            password: String::new(),
            name: String::new(),
            encrypt: true,
            trust_server_certificate: true,
            pool_max: 10,
            pool_min: 0,
            idle_timeout: Duration::from_millis(30_000),
            ensure_schema: false,
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseConfig::default();
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            server: text("DB_SERVER", &defaults.server),
            port: parsed(&lookup, "DB_PORT", defaults.port),
            user: text("DB_USER", &defaults.user),
            password: text("DB_PASSWORD", &defaults.password),
            name: text("DB_NAME", &defaults.name),
            encrypt: flag(&lookup, "DB_ENCRYPT", defaults.encrypt),
            trust_server_certificate: flag(
                &lookup,
                "DB_TRUST_SERVER_CERTIFICATE",
                defaults.trust_server_certificate,
            ),
            pool_max: parsed(&lookup, "DB_POOL_MAX", defaults.pool_max).max(1),
            pool_min: parsed(&lookup, "DB_POOL_MIN", defaults.pool_min),
            idle_timeout: Duration::from_millis(parsed(
                &lookup,
                "DB_POOL_IDLE_TIMEOUT_MS",
                defaults.idle_timeout.as_millis() as u64,
            )),
            ensure_schema: flag(&lookup, "DB_ENSURE_SCHEMA", defaults.ensure_schema),
        };

        Self {
            port: parsed(&lookup, "PORT", DEFAULT_PORT),
            database,
        }
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "unparseable setting, using default");
            default
        }),
    }
}

fn flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "true" | "t" | "1" | "yes" => true,
            "false" | "f" | "0" | "no" => false,
            _ => {
                warn!(key, value = %raw, default, "unparseable flag, using default");
                default
            }
        },
    }
}
