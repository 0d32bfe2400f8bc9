//! Cart storage errors.

use bloom::carts::StoreError;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};

/// Classify a database failure into the cart store's error vocabulary.
pub(crate) fn store_error(error: Error) -> StoreError {
    match error {
        Error::ColumnDecode { index, source } => {
            StoreError::InvalidRow(format!("column {index}: {source}"))
        }
        Error::ColumnNotFound(column) => StoreError::InvalidRow(format!("missing column {column}")),
        Error::Decode(source) => StoreError::InvalidRow(source.to_string()),
        error => match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => StoreError::UnknownProduct,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => {
                StoreError::InvalidRow(error.to_string())
            }
            Some(ErrorKind::UniqueViolation | ErrorKind::Other | _) | None => {
                StoreError::backend(error)
            }
        },
    }
}
