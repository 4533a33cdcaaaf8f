use crate::domain::product::Product;
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{ErrorResponse, MessageResponse, ProductPayload};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(Product, ProductPayload, MessageResponse, ErrorResponse))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/products",
            get(products::list_products_handler)
                .post(products::create_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .route("/products/:id", get(products::get_product_handler))
        .with_state(app_state)
}
