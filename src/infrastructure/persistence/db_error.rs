//! Translation of SQLx failures into [`StorageError`].

use crate::domain::error::StorageError;

/// Classifies a failed write or lookup.
///
/// - `RowNotFound` becomes [`StorageError::NotFound`]
/// - unique constraint violations become [`StorageError::Conflict`]
/// - foreign key violations become [`StorageError::Referential`]
/// - everything else becomes [`StorageError::Internal`] tagged with `op`
pub fn classify(op: &'static str, entity: &'static str, e: sqlx::Error) -> StorageError {
    if matches!(e, sqlx::Error::RowNotFound) {
        return StorageError::not_found(entity);
    }

    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return StorageError::Conflict {
                entity,
                constraint: db_err.constraint().map(str::to_string),
            };
        }
        if db_err.is_foreign_key_violation() {
            return StorageError::Referential { entity };
        }
    }

    tracing::debug!(op, error = %e, "Storage operation failed");
    StorageError::internal(op, e)
}

/// Wraps a failure that maps to [`StorageError::Internal`] regardless of kind.
pub fn internal(op: &'static str) -> impl FnOnce(sqlx::Error) -> StorageError {
    move |e| StorageError::internal(op, e)
}
