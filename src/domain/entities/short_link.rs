//! Short link entity.

/// An alias mapped to the URL it redirects to.
///
/// The alias is unique across all short links; the target URL is stored and
/// returned exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
}

impl ShortLink {
    pub fn new(id: i64, alias: String, target_url: String) -> Self {
        Self {
            id,
            alias,
            target_url,
        }
    }
}
