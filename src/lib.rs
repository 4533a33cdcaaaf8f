pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::error::{ServiceError, ServiceResult};
pub use app::product_service::ProductService;
pub use domain::product::{Product, ProductInput};
pub use infra::config::Config;
