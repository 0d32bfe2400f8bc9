//! Catalog storage errors.

use bloom::products::ProductError;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};

pub(crate) fn catalog_error(error: Error) -> ProductError {
    if matches!(error, Error::RowNotFound) {
        return ProductError::NotFound;
    }

    match error.as_database_error().map(DatabaseError::kind) {
        Some(ErrorKind::UniqueViolation) => ProductError::AlreadyExists,
        Some(ErrorKind::Other | _) | None => ProductError::Backend(Box::new(error)),
    }
}
