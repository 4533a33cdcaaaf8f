//! End-to-end CRUD test against a real Postgres.
//!
//! Needs `DATABASE_URL` (or a `.env` providing it), so it is ignored by default. Run it with
//! `cargo test --test test_products_crud -- --ignored`.
//! It creates the `products` table if needed and only touches rows it created itself.

use product_service::infra::database;
use product_service::{transport, Product, ProductService};
use serde_json::{json, Value as JsonValue};
use sqlx::postgres::PgPoolOptions;
use std::env;

async fn count_rows(pool: &sqlx::PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "requires DATABASE_URL"]
async fn test_products_crud() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let database_url = env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .ok_or("DATABASE_URL must be set to run the products CRUD test")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    database::ensure_schema(&pool).await?;

    let state = transport::http::AppState::new(ProductService::new(pool.clone()));
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;
    let unique_name = format!("Widget-{}", std::process::id());

    // --- Create ---
    let resp = client
        .post(format!("{}/products", base_url))
        .json(&json!({"productName": format!("  {}  ", unique_name), "price": 9.99, "stock": 5}))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let body: JsonValue = resp.json().await?;
    assert_eq!(body["message"], "Product created");

    // --- List includes the trimmed name ---
    let products: Vec<Product> = client
        .get(format!("{}/products", base_url))
        .send()
        .await?
        .json()
        .await?;
    let created = products
        .iter()
        .find(|p| p.product_name == unique_name)
        .cloned()
        .expect("created product should be listed");
    assert_eq!(created.price, 9.99);
    assert_eq!(created.stock, 5);

    // --- Get by id round-trips ---
    let fetched: Product = client
        .get(format!("{}/products/{}", base_url, created.product_id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched, created);

    // --- Invalid payload performs no write ---
    let before = count_rows(&pool).await?;
    let resp = client
        .post(format!("{}/products", base_url))
        .json(&json!({"productName": "Widget", "price": 0, "stock": 5}))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(count_rows(&pool).await?, before);

    // --- Update ---
    let resp = client
        .put(format!("{}/products?id={}", base_url, created.product_id))
        .json(&json!({"productName": format!("{}-v2", unique_name), "price": 12.5, "stock": 0}))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: JsonValue = resp.json().await?;
    assert_eq!(body["message"], "Product updated");

    let fetched: Product = client
        .get(format!("{}/products/{}", base_url, created.product_id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched.product_name, format!("{}-v2", unique_name));
    assert_eq!(fetched.price, 12.5);
    assert_eq!(fetched.stock, 0);

    // --- Unknown ids are 404 and leave the table unchanged ---
    let missing_id: i32 = sqlx::query_scalar("SELECT COALESCE(MAX(product_id), 0) + 1000 FROM products")
        .fetch_one(&pool)
        .await?;
    let resp = client
        .get(format!("{}/products/{}", base_url, missing_id))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body: JsonValue = resp.json().await?;
    assert_eq!(body["error"], "Product not found");

    let before = count_rows(&pool).await?;
    let resp = client
        .put(format!("{}/products?id={}", base_url, missing_id))
        .json(&json!({"productName": "Ghost", "price": 1.0, "stock": 1}))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(count_rows(&pool).await?, before);

    // --- Delete removes exactly one row; a second delete is 404 ---
    let before = count_rows(&pool).await?;
    let resp = client
        .delete(format!("{}/products?id={}", base_url, created.product_id))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: JsonValue = resp.json().await?;
    assert_eq!(body["message"], "Product deleted");
    assert_eq!(count_rows(&pool).await?, before - 1);

    let resp = client
        .delete(format!("{}/products?id={}", base_url, created.product_id))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    let resp = client
        .get(format!("{}/health", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    server.abort();
    pool.close().await;
    Ok(())
}
