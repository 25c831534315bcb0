use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::client::ParseStatusError;

/// Uniform error for any persistence gateway failure. Callers treat all
/// variants the same way: surface an alert and leave the cached list
/// untouched.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation
                    | DatabaseErrorKind::ForeignKeyViolation
                    | DatabaseErrorKind::NotNullViolation
                    | DatabaseErrorKind::CheckViolation => {
                        RepositoryError::ConstraintViolation(message)
                    }
                    _ => RepositoryError::Database(message),
                }
            }
            DieselError::DeserializationError(e) => {
                RepositoryError::Validation(format!("Deserialization error: {e}"))
            }
            DieselError::SerializationError(e) => {
                RepositoryError::Validation(format!("Serialization error: {e}"))
            }
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}

impl From<ParseStatusError> for RepositoryError {
    fn from(err: ParseStatusError) -> Self {
        RepositoryError::Validation(err.to_string())
    }
}
