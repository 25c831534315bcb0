use thiserror::Error;

use crate::gemini::GenerationError;
use crate::repository::errors::RepositoryError;

pub mod client;
pub mod insight;
pub mod main;

/// Error surface of the service layer. Routes convert these into flash
/// alerts or redirects; nothing here is allowed to crash a handler.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
