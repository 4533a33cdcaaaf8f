//! Connection pool construction and startup checks.

use crate::infra::config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;
use tracing::{error, info};

pub const CREATE_PRODUCTS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS products (
    product_id SERIAL PRIMARY KEY,
    product_name TEXT NOT NULL CHECK (btrim(product_name) <> ''),
    price DOUBLE PRECISION NOT NULL CHECK (price > 0),
    stock INTEGER NOT NULL CHECK (stock >= 0)
)";

/// Maps the encrypt/trust flags onto a Postgres SSL mode.
pub fn ssl_mode(config: &DatabaseConfig) -> PgSslMode {
    match (config.encrypt, config.trust_server_certificate) {
        (false, _) => PgSslMode::Disable,
        (true, true) => PgSslMode::Require,
        (true, false) => PgSslMode::VerifyFull,
    }
}

pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    if let Some(url) = &config.url {
        match PgConnectOptions::from_str(url) {
            Ok(options) => return options,
            Err(e) => error!(error = %e, "DATABASE_URL is not a valid connection string, using DB_* settings"),
        }
    }

    PgConnectOptions::new()
        .host(&config.server)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(ssl_mode(config))
}

/// Builds the bounded pool without opening a connection.
///
/// Connections are established on first use, so an unreachable database never prevents the
/// process from starting; each request fails on its own instead.
pub fn build_pool(config: &DatabaseConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.pool_max)
        .min_connections(config.pool_min.min(config.pool_max))
        .idle_timeout(config.idle_timeout)
        .connect_lazy_with(connect_options(config))
}

/// Opens one connection to report database reachability at startup. Never fails the caller.
pub async fn probe(pool: &PgPool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => {
            info!("connected to database");
            true
        }
        Err(e) => {
            error!(error = %e, "database connection failed");
            false
        }
    }
}

/// Creates the `products` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS_TABLE_SQL).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssl_mode_follows_flags() {
        let mut config = DatabaseConfig::default();
        assert!(matches!(ssl_mode(&config), PgSslMode::Require));

        config.trust_server_certificate = false;
        assert!(matches!(ssl_mode(&config), PgSslMode::VerifyFull));

        config.encrypt = false;
        assert!(matches!(ssl_mode(&config), PgSslMode::Disable));
    }

    #[test]
    fn discrete_settings_build_connect_options() {
        let config = DatabaseConfig {
            server: "db.internal".to_string(),
            port: 6543,
            user: "shop".to_string(),
            name: "catalogue".to_string(),
            ..DatabaseConfig::default()
        };
        let options = connect_options(&config);
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "shop");
        assert_eq!(options.get_database(), Some("catalogue"));
    }

    #[test]
    fn database_url_takes_precedence() {
        let config = DatabaseConfig {
            url: Some("postgres://other@elsewhere:7000/shop".to_string()),
            server: "ignored".to_string(),
            ..DatabaseConfig::default()
        };
        let options = connect_options(&config);
        assert_eq!(options.get_host(), "elsewhere");
        assert_eq!(options.get_port(), 7000);
        assert_eq!(options.get_username(), "other");
    }

    #[tokio::test]
    async fn probe_reports_unreachable_database() {
        let config = DatabaseConfig {
            url: Some("postgres://nobody@127.0.0.1:1/none?sslmode=disable".to_string()),
            ..DatabaseConfig::default()
        };
        let pool = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_secs(2))
            .connect_lazy_with(connect_options(&config));
        assert!(!probe(&pool).await);
    }
}
