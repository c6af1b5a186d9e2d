//! Service layer error types

use thiserror::Error;

use warden_core::DomainError;
use warden_store::StoreError;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
