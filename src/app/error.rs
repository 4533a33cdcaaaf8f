//! Error taxonomy shared by the service and transport layers.

use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed id, or a payload field that is missing or out of range.
    #[error("{0}")]
    InvalidArgument(String),

    /// No row matched the id on read, update or delete.
    #[error("{0}")]
    NotFound(String),

    /// Connection or query error. The driver's text is passed through to the caller.
    #[error("{0}")]
    DatabaseFailure(#[from] sqlx::Error),
}

impl ServiceError {
    pub fn invalid_input(reason: impl std::fmt::Display) -> Self {
        ServiceError::InvalidArgument(format!("Invalid input: {}", reason))
    }

    pub fn product_not_found() -> Self {
        ServiceError::NotFound("Product not found".to_string())
    }
}
