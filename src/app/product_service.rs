//! The Product Service.
//!
//! Every operation is a single parameter-bound statement against the `products` table, run on
//! the shared pool. The database is the only state; nothing is cached between requests.

use crate::app::error::{ServiceError, ServiceResult};
use crate::domain::product::{Product, ProductInput};
use sqlx::PgPool;
use tracing::debug;

const SELECT_ALL: &str = "SELECT product_id, product_name, price, stock FROM products";
const SELECT_BY_ID: &str =
    "SELECT product_id, product_name, price, stock FROM products WHERE product_id = $1";
const INSERT: &str = "INSERT INTO products (product_name, price, stock) VALUES ($1, $2, $3)";
const UPDATE_BY_ID: &str =
    "UPDATE products SET product_name = $1, price = $2, stock = $3 WHERE product_id = $4";
const DELETE_BY_ID: &str = "DELETE FROM products WHERE product_id = $1";

#[derive(Clone)]
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns every row, in whatever order the database yields them.
    pub async fn list(&self) -> ServiceResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        debug!(count = products.len(), "listed products");
        Ok(products)
    }

    pub async fn get(&self, id: i32) -> ServiceResult<Product> {
        sqlx::query_as::<_, Product>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(ServiceError::product_not_found)
    }

    /// Inserts one row. The generated id is not returned.
    pub async fn create(&self, input: &ProductInput) -> ServiceResult<()> {
        sqlx::query(INSERT)
            .bind(input.product_name())
            .bind(input.price())
            .bind(input.stock())
            .execute(&self.pool)
            .await?;
        debug!(name = input.product_name(), "inserted product");
        Ok(())
    }

    /// Overwrites name, price and stock of one row. Zero rows affected means the id is unknown.
    pub async fn update(&self, id: i32, input: &ProductInput) -> ServiceResult<()> {
        let result = sqlx::query(UPDATE_BY_ID)
            .bind(input.product_name())
            .bind(input.price())
            .bind(input.stock())
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ServiceError::product_not_found());
        }
        debug!(id, "updated product");
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ServiceError::product_not_found());
        }
        debug!(id, "deleted product");
        Ok(())
    }
}
