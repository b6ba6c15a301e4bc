//! DTOs for product group endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{NewProductGroup, ProductGroup};

/// Request to save a product group.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveProductGroupRequest {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl From<SaveProductGroupRequest> for NewProductGroup {
    fn from(req: SaveProductGroupRequest) -> Self {
        NewProductGroup {
            title: req.title,
            description: req.description,
        }
    }
}

/// Product group as rendered on the wire.
#[serde_as]
#[derive(Debug, Serialize)]
pub struct ProductGroupItem {
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<ProductGroup> for ProductGroupItem {
    fn from(g: ProductGroup) -> Self {
        Self {
            id: g.id,
            title: g.title,
            description: g.description,
        }
    }
}
