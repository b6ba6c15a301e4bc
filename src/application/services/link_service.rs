//! Short link creation, resolution and removal.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::error::StorageError;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::alias::{generate_alias, validate_alias};
use serde_json::json;

/// Attempts at inserting a generated alias before giving up.
const MAX_GENERATE_ATTEMPTS: usize = 5;

/// Service for managing alias to URL mappings.
///
/// Client-chosen aliases are validated and stored as-is; a duplicate is
/// reported as a conflict. When no alias is given a random one is generated,
/// retrying with a fresh alias if the store reports a collision.
pub struct LinkService<R: ShortLinkRepository> {
    repository: Arc<R>,
}

impl<R: ShortLinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores `target_url` under `alias`, or under a generated alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the alias is invalid or already taken.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn create_short_link(
        &self,
        target_url: String,
        alias: Option<String>,
    ) -> Result<ShortLink, AppError> {
        let link = match alias {
            Some(alias) => {
                validate_alias(&alias)?;
                let id = self.repository.save(&target_url, &alias).await?;
                ShortLink::new(id, alias, target_url)
            }
            None => self.save_with_generated_alias(target_url).await?,
        };

        tracing::info!(id = link.id, alias = %link.alias, "Short link saved");
        Ok(link)
    }

    /// Returns the target URL stored for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        Ok(self.repository.resolve(alias).await?)
    }

    /// Removes the mapping for `alias`.
    ///
    /// Succeeds whether or not the alias existed.
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        self.repository.delete(alias).await?;
        tracing::info!(alias, "Short link removed");
        Ok(())
    }

    async fn save_with_generated_alias(&self, target_url: String) -> Result<ShortLink, AppError> {
        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let alias = generate_alias();
            match self.repository.save(&target_url, &alias).await {
                Ok(id) => return Ok(ShortLink::new(id, alias, target_url)),
                Err(StorageError::Conflict { .. }) => {
                    tracing::debug!(alias = %alias, "Generated alias collided, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique alias",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
