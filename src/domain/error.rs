//! Storage error taxonomy.
//!
//! Every repository operation classifies the underlying store failure into
//! exactly one [`StorageError`] variant. Store-specific error types never
//! cross this boundary: internal failures keep their cause as an opaque
//! boxed source.

use std::error::Error as StdError;
use thiserror::Error;

/// Opaque cause of an internal storage failure.
pub type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

/// Classified storage failure.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No row matched the lookup key.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// A unique constraint rejected the write.
    #[error("{entity} already exists")]
    Conflict {
        entity: &'static str,
        constraint: Option<String>,
    },

    /// A foreign key rejected the write.
    #[error("{entity} references a row that does not exist")]
    Referential { entity: &'static str },

    /// Any other store failure: connection loss, malformed statement, I/O.
    #[error("storage operation {op} failed")]
    Internal {
        op: &'static str,
        #[source]
        source: BoxedSource,
    },

    /// The store could not be opened or its schema could not be created.
    #[error("storage initialization failed: {message}")]
    Initialization {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl StorageError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn internal(op: &'static str, source: impl Into<BoxedSource>) -> Self {
        Self::Internal {
            op,
            source: source.into(),
        }
    }

    pub fn initialization(message: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        Self::Initialization {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    pub fn is_referential(&self) -> bool {
        matches!(self, Self::Referential { .. })
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            StorageError::not_found("short link").to_string(),
            "short link not found"
        );
        assert_eq!(
            StorageError::Conflict {
                entity: "short link",
                constraint: None
            }
            .to_string(),
            "short link already exists"
        );
        assert_eq!(
            StorageError::Referential { entity: "product" }.to_string(),
            "product references a row that does not exist"
        );
    }

    #[test]
    fn test_internal_keeps_source() {
        let err = StorageError::internal("short_link.save", "disk I/O error");
        assert_eq!(err.to_string(), "storage operation short_link.save failed");
        assert_eq!(err.source().unwrap().to_string(), "disk I/O error");
    }

    #[test]
    fn test_predicates() {
        assert!(StorageError::not_found("product").is_not_found());
        assert!(!StorageError::not_found("product").is_conflict());
        assert!(StorageError::Referential { entity: "product" }.is_referential());
    }
}
