//! Error types for the payment service.

use crate::ports::GatewayError;

/// Domain-level errors (request validation failures).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("amount is lower than charge limit")]
    AmountBelowLimit { min: i64, requested: i64 },

    #[error("charge limit exceeded")]
    ChargeLimitExceeded { max: i64, requested: i64 },

    #[error("invalid currency")]
    InvalidCurrency,

    #[error("invalid source type")]
    InvalidSourceType,

    #[error("require charge id")]
    MissingChargeId,
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Errors returned by the payment service operations.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("not found")]
    NotFound,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Repo(RepoError),
}

impl From<RepoError> for PaymentError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => PaymentError::NotFound,
            other => PaymentError::Repo(other),
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::Domain(e) => AppError::BadRequest(e.to_string()),
            PaymentError::NotFound => AppError::NotFound("not found".into()),
            PaymentError::Gateway(e) => AppError::Internal(e.to_string()),
            PaymentError::Repo(e) => AppError::Internal(e.to_string()),
        }
    }
}
