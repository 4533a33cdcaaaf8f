// src/bin/api_server.rs

use product_service::infra::{database, shutdown, telemetry};
use product_service::{transport, Config, ProductService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may carry RUST_LOG, so load it before the subscriber reads the filter.
    dotenv::dotenv().ok();
    telemetry::init();
    let config = Config::from_env();

    // --- Pool Initialization ---
    // Built lazily; a failed probe is logged and startup continues.
    info!(
        max = config.database.pool_max,
        min = config.database.pool_min,
        idle_timeout_ms = config.database.idle_timeout.as_millis() as u64,
        "initializing database pool"
    );
    let pool = database::build_pool(&config.database);
    if database::probe(&pool).await && config.database.ensure_schema {
        match database::ensure_schema(&pool).await {
            Ok(()) => info!("products table ready"),
            Err(e) => error!(error = %e, "could not create products table"),
        }
    }

    let app_state = transport::http::AppState::new(ProductService::new(pool.clone()));

    // --- API Server Initialization ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("server running on port {}", config.port);
    info!("Swagger UI available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    info!("closing database pool");
    pool.close().await;
    info!("graceful shutdown complete");
    Ok(())
}
