//! Product group entity.

/// A named collection of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

/// Input data for creating a new product group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductGroup {
    pub title: String,
    pub description: Option<String>,
}

impl NewProductGroup {
    /// Attaches the store-assigned identifier.
    pub fn into_group(self, id: i64) -> ProductGroup {
        ProductGroup {
            id,
            title: self.title,
            description: self.description,
        }
    }
}
