pub mod error;
pub mod product_service;
