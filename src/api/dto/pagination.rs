//! Offset-based pagination request and list response.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Page;

/// Body of the `*/list` endpoints.
///
/// `limit` is required and must be between 1 and 1000. `offset` defaults to
/// 0; an offset past the end of the table is valid and yields an empty page.
#[derive(Debug, Deserialize, Validate)]
pub struct ListRequest {
    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: i64,

    #[validate(required, range(min = 1, max = 1000))]
    pub limit: Option<i64>,
}

impl ListRequest {
    /// Returns `(limit, offset)` for a validated request.
    ///
    /// Call only after [`Validate::validate`] succeeded; `limit` is then set.
    pub fn limit_offset(&self) -> (i64, i64) {
        (self.limit.unwrap_or_default(), self.offset)
    }
}

/// Payload of a list response.
#[derive(Debug, Serialize)]
pub struct ListData<T: Serialize> {
    pub items: Vec<T>,
    pub count: i64,
}

impl<T: Serialize> ListData<T> {
    pub fn from_page<E>(page: Page<E>, f: impl FnMut(E) -> T) -> Self {
        let page = page.map(f);
        Self {
            items: page.items,
            count: page.total,
        }
    }
}
