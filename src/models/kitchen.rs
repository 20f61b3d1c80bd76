//! Catalog records: kitchens and product details.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier the server assigns to a catalog entry.
pub type KitchenId = i64;

/// A kitchen (restaurant listing) as returned by `GET products/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Kitchen {
    pub id: KitchenId,
    pub name: String,
    pub description: String,
    pub stock: i64,
    /// Nullable on the server side
    #[serde(default)]
    pub image_url: Option<String>,
    /// Decimal amount as text, exactly as the server sends it.
    pub price: String,
    pub rating: f64,
    pub review_count: i64,
    pub delivery_time: String,
    pub distance: String,
    pub discount: String,
}

impl Kitchen {
    /// Parsed price, or `None` when the server text is not a decimal.
    pub fn unit_price(&self) -> Option<Decimal> {
        parse_price(&self.price)
    }

    /// Case-insensitive name match used by the catalog search box.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Parse a decimal-as-text price, tolerating surrounding whitespace.
pub fn parse_price(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim()).ok()
}

/// Product detail returned by `GET products/{id}/`.
///
/// The detail endpoint uses the server's own field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: KitchenId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    pub stock: i64,
    #[serde(rename = "imagen_url")]
    pub image_url: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn kitchen(id: KitchenId, name: &str, price: &str) -> Kitchen {
        Kitchen {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            stock: 10,
            image_url: None,
            price: price.to_string(),
            rating: 4.5,
            review_count: 12,
            delivery_time: "25 min".to_string(),
            distance: "1.2 km".to_string(),
            discount: "10%".to_string(),
        }
    }
}
