use crate::app::error::ServiceError;
use crate::domain::product::{parse_product_id, ProductInput};
use crate::transport::http::types::ErrorResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;
use tracing::{debug, error};

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::DatabaseFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ServiceError::DatabaseFailure(e) => error!(error = %e, "database call failed"),
            other => debug!(status = status.as_u16(), error = %other, "request rejected"),
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Id taken from the `/products/:id` path segment.
pub fn path_id(raw: &str) -> Result<i32, ServiceError> {
    parse_product_id(raw).ok_or_else(|| ServiceError::InvalidArgument("Invalid product ID".to_string()))
}

/// Id taken from the `?id=` query parameter; absent counts as invalid.
pub fn query_id(raw: Option<&str>) -> Result<i32, ServiceError> {
    raw.and_then(parse_product_id).ok_or_else(|| {
        ServiceError::InvalidArgument("Missing or invalid product ID".to_string())
    })
}

/// Turns the raw body (or its rejection) into a validated payload.
pub fn product_input(
    request: Result<Json<JsonValue>, JsonRejection>,
) -> Result<ProductInput, ServiceError> {
    let Json(payload) = request.map_err(|rejection| ServiceError::invalid_input(rejection.body_text()))?;
    ProductInput::from_json(&payload).map_err(ServiceError::invalid_input)
}
