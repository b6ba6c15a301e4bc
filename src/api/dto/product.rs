//! DTOs for product endpoints.
//!
//! Numeric request fields accept either JSON numbers or numeric strings.
//! Identifiers are rendered as strings in responses.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::{Validate, ValidationError};

use crate::domain::entities::{NewProduct, Product};

/// Request to save a product.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveProductRequest {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub title: String,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(required, range(min = 0.0), custom(function = "finite_price"))]
    pub price: Option<f64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(required, url)]
    pub img_url: Option<String>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(required, range(min = 0))]
    pub weight: Option<i64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(required, range(min = 1))]
    pub group_id: Option<i64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(min = 0))]
    pub quantity: Option<i64>,

    #[serde(default)]
    pub is_popular: Option<bool>,

    #[serde(default)]
    pub composition: Option<String>,
}

impl SaveProductRequest {
    /// Converts a validated request into storage input.
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            title: self.title,
            price: self.price.unwrap_or_default(),
            description: self.description,
            image_url: self.img_url.unwrap_or_default(),
            weight: self.weight.unwrap_or_default(),
            group_id: self.group_id.unwrap_or_default(),
            quantity: self.quantity,
            is_popular: self.is_popular,
            composition: self.composition,
        }
    }
}

// `"NaN"` and `"inf"` parse as f64 and slip past `range`.
fn finite_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("range"))
    }
}

/// Product as rendered on the wire.
#[serde_as]
#[derive(Debug, Serialize)]
pub struct ProductItem {
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "imgUrl")]
    pub img_url: String,
    pub weight: i64,
    #[serde_as(as = "DisplayFromStr")]
    pub group_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
}

impl From<Product> for ProductItem {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            title: p.title,
            price: p.price,
            description: p.description,
            img_url: p.image_url,
            weight: p.weight,
            group_id: p.group_id,
            quantity: p.quantity,
            is_popular: p.is_popular,
            composition: p.composition,
        }
    }
}
