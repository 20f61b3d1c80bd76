//! The add-product form as typed by the user.

use crate::api::AddProductRequest;
use crate::error::{is_blank, ValidationError};
use crate::models::parse_price;

/// Raw text of every field on the add-product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub stock: String,
    pub image_url: String,
    pub price: String,
    pub rating: String,
    pub review_count: String,
    pub delivery_time: String,
    pub distance: String,
    pub discount: String,
}

impl ProductForm {
    /// True when every field has a non-blank value.
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.description,
            &self.stock,
            &self.image_url,
            &self.price,
            &self.rating,
            &self.review_count,
            &self.delivery_time,
            &self.distance,
            &self.discount,
        ]
        .iter()
        .all(|value| !is_blank(value))
    }

    /// Validate the form and build the request body.
    pub fn to_request(&self) -> Result<AddProductRequest, ValidationError> {
        if !self.is_complete() {
            return Err(ValidationError::MissingFields);
        }

        let stock = self
            .stock
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidNumber { field: "Stock" })?;
        let review_count = self
            .review_count
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidNumber {
                field: "Review count",
            })?;
        let rating = self
            .rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite())
            .ok_or(ValidationError::InvalidNumber { field: "Rating" })?;
        let price = parse_price(&self.price)
            .ok_or(ValidationError::InvalidNumber { field: "Price" })?;

        Ok(AddProductRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            stock,
            image_url: self.image_url.trim().to_string(),
            price: price.to_string(),
            rating,
            review_count,
            delivery_time: self.delivery_time.trim().to_string(),
            distance: self.distance.trim().to_string(),
            discount: self.discount.trim().to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) fn filled_form() -> ProductForm {
    ProductForm {
        name: "Taco Hub".to_string(),
        description: "Street tacos".to_string(),
        stock: "12".to_string(),
        image_url: "https://img.test/taco.png".to_string(),
        price: "8.50".to_string(),
        rating: "4.7".to_string(),
        review_count: "120".to_string(),
        delivery_time: "20 min".to_string(),
        distance: "0.8 km".to_string(),
        discount: "5%".to_string(),
    }
}
