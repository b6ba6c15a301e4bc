//! Product entity.

/// A catalog item.
///
/// `price` is kept as submitted, without rounding. `weight` is an integer
/// amount of the catalog's weight unit. `quantity`, `is_popular` and
/// `composition` are optional attributes: `None` means the column is NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: String,
    pub weight: i64,
    pub group_id: i64,
    pub quantity: Option<i64>,
    pub is_popular: Option<bool>,
    pub composition: Option<String>,
}

/// Input data for creating a new product.
///
/// `group_id` must reference an existing [`super::ProductGroup`] at write time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: String,
    pub weight: i64,
    pub group_id: i64,
    pub quantity: Option<i64>,
    pub is_popular: Option<bool>,
    pub composition: Option<String>,
}

impl NewProduct {
    /// Attaches the store-assigned identifier.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
            weight: self.weight,
            group_id: self.group_id,
            quantity: self.quantity,
            is_popular: self.is_popular,
            composition: self.composition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_product_keeps_fields() {
        let new_product = NewProduct {
            title: "Chips".to_string(),
            price: 2.50,
            image_url: "http://x/y.png".to_string(),
            weight: 100,
            group_id: 1,
            ..Default::default()
        };

        let product = new_product.clone().into_product(7);

        assert_eq!(product.id, 7);
        assert_eq!(product.title, new_product.title);
        assert_eq!(product.price, 2.50);
        assert_eq!(product.group_id, 1);
        assert!(product.description.is_none());
        assert!(product.quantity.is_none());
        assert!(product.is_popular.is_none());
        assert!(product.composition.is_none());
    }
}
