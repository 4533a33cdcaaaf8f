use crate::app::product_service::ProductService;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}

/// Body of every non-error write response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Write payload as documented in the OpenAPI schema.
///
/// Handlers validate the raw JSON instead of deserializing into this type, so that a wrong
/// field type is reported as invalid input.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[schema(example = "Widget")]
    pub product_name: String,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = 5)]
    pub stock: i32,
}

/// `?id=` on update and delete. Kept as text so a bad value is answered with 400 by the handler.
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    /// Product id (integer).
    pub id: Option<String>,
}
