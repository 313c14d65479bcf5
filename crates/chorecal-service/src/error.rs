use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    StoreError(#[from] chorecal_store::error::StoreError),

    #[error(transparent)]
    CoreError(#[from] chorecal_core::error::CoreError),

    #[error("Chore not found: {0}")]
    NotFound(uuid::Uuid),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
