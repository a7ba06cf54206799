use crate::domain::common::define_aggregate_id;
use crate::enums::StockLevel;
use serde::{Deserialize, Serialize};

define_aggregate_id!(
    /// Unique identifier of an inventory item
    ProductId
);

/// Inventory item as returned by `GET /inventory/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_stock(self.stock)
    }
}

/// Payload for `POST /inventory/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
}
