//! Domain types for the product catalogue.

pub mod product;

pub use product::{parse_product_id, Product, ProductInput};
