//! The `Product` record and the rules a write payload must satisfy.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// A row of the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub price: f64,
    pub stock: i32,
}

/// A validated create/update payload.
///
/// Only constructible through [`ProductInput::from_json`] (or [`ProductInput::new`]), so holding
/// one means the name is trimmed and non-empty, `price > 0` and `stock >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    product_name: String,
    price: f64,
    stock: i32,
}

/// Accepted keys for each field: the camelCase name first, then the legacy upper-case column name.
const NAME_KEYS: [&str; 2] = ["productName", "PRODUCTNAME"];
const PRICE_KEYS: [&str; 2] = ["price", "PRICE"];
const STOCK_KEYS: [&str; 2] = ["stock", "STOCK"];

impl ProductInput {
    pub fn new(product_name: &str, price: f64, stock: i64) -> Result<Self, String> {
        let name = product_name.trim();
        if name.is_empty() {
            return Err("productName must be a non-empty string".to_string());
        }
        if !price.is_finite() || price <= 0.0 {
            return Err("price must be a number greater than 0".to_string());
        }
        if stock < 0 {
            return Err("stock must be a number greater than or equal to 0".to_string());
        }
        let stock = i32::try_from(stock).map_err(|_| format!("stock out of range: {}", stock))?;
        Ok(Self {
            product_name: name.to_string(),
            price,
            stock,
        })
    }

    /// Validates a raw JSON body. Checks run in order: name, price, stock.
    ///
    /// Working on the raw value (instead of a typed `Deserialize`) lets a wrong JSON type, e.g.
    /// `"price": "9.99"`, be reported as invalid input rather than a body rejection.
    pub fn from_json(payload: &JsonValue) -> Result<Self, String> {
        let obj = payload
            .as_object()
            .ok_or_else(|| "payload must be a JSON object".to_string())?;
        let field = |keys: &[&str]| keys.iter().find_map(|k| obj.get(*k));

        let name = match field(&NAME_KEYS) {
            Some(JsonValue::String(s)) if !s.trim().is_empty() => s.as_str(),
            _ => return Err("productName must be a non-empty string".to_string()),
        };

        let price = match field(&PRICE_KEYS).and_then(JsonValue::as_f64) {
            Some(p) if p > 0.0 => p,
            _ => return Err("price must be a number greater than 0".to_string()),
        };

        let stock = match field(&STOCK_KEYS) {
            Some(JsonValue::Number(n)) => match n.as_i64() {
                Some(s) if s >= 0 => s,
                Some(_) => {
                    return Err("stock must be a number greater than or equal to 0".to_string())
                }
                None if n.is_u64() => return Err(format!("stock out of range: {}", n)),
                None => match n.as_f64() {
                    Some(f) if f < 0.0 => {
                        return Err(
                            "stock must be a number greater than or equal to 0".to_string()
                        )
                    }
                    Some(f) if f.fract() != 0.0 => {
                        return Err("stock must be a whole number".to_string())
                    }
                    Some(f) if f <= i32::MAX as f64 => f as i64,
                    _ => return Err(format!("stock out of range: {}", n)),
                },
            },
            _ => return Err("stock must be a number greater than or equal to 0".to_string()),
        };

        Self::new(name, price, stock)
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }
}

/// Parses a product id from a path segment or query value.
///
/// The whole trimmed value must be an `i32`; `"12abc"`, `"1.5"` and `""` are rejected.
pub fn parse_product_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}
