use crate::app::error::ServiceError;
use crate::domain::product::Product;
use crate::transport::http::handlers::common::{path_id, product_input, query_id};
use crate::transport::http::types::{AppState, IdQuery, MessageResponse};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value as JsonValue;
use tracing::info;

fn id_from_query(query: Result<Query<IdQuery>, QueryRejection>) -> Result<i32, ServiceError> {
    let raw = query.ok().and_then(|Query(q)| q.id);
    query_id(raw.as_deref())
}

fn id_from_path(path: Result<Path<String>, PathRejection>) -> Result<i32, ServiceError> {
    match path {
        Ok(Path(raw)) => path_id(&raw),
        Err(_) => path_id(""),
    }
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Database error", body = crate::transport::http::types::ErrorResponse)
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ServiceError> {
    let products = state.product_service.list().await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = String, Path, description = "Product id (integer)")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Invalid product ID", body = crate::transport::http::types::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::transport::http::types::ErrorResponse),
        (status = 500, description = "Database error", body = crate::transport::http::types::ErrorResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, ServiceError> {
    let id = id_from_path(path)?;
    let product = state.product_service.get(id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = crate::transport::http::types::ProductPayload,
    responses(
        (status = 201, description = "Product created", body = MessageResponse),
        (status = 400, description = "Invalid input", body = crate::transport::http::types::ErrorResponse),
        (status = 500, description = "Database error", body = crate::transport::http::types::ErrorResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    request: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let input = product_input(request)?;
    state.product_service.create(&input).await?;
    info!(name = input.product_name(), "product created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Product created")),
    ))
}

#[utoipa::path(
    put,
    path = "/products",
    params(IdQuery),
    request_body = crate::transport::http::types::ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = MessageResponse),
        (status = 400, description = "Missing or invalid product ID, or invalid input", body = crate::transport::http::types::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::transport::http::types::ErrorResponse),
        (status = 500, description = "Database error", body = crate::transport::http::types::ErrorResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    request: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<MessageResponse>, ServiceError> {
    let id = id_from_query(query)?;
    let input = product_input(request)?;
    state.product_service.update(id, &input).await?;
    info!(id, "product updated");
    Ok(Json(MessageResponse::new("Product updated")))
}

#[utoipa::path(
    delete,
    path = "/products",
    params(IdQuery),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, description = "Missing or invalid product ID", body = crate::transport::http::types::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::transport::http::types::ErrorResponse),
        (status = 500, description = "Database error", body = crate::transport::http::types::ErrorResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ServiceError> {
    let id = id_from_query(query)?;
    state.product_service.delete(id).await?;
    info!(id, "product deleted");
    Ok(Json(MessageResponse::new("Product deleted")))
}
