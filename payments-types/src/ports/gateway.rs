//! Payment gateway port.
//!
//! This trait defines the two gateway operations the service needs.
//! Implementations can be HTTP clients, test doubles, etc.

use crate::domain::{Currency, SourceType};

/// Error type for gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Gateway rejected request ({status}): {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Invalid gateway response: {0}")]
    InvalidResponse(String),
}

/// Parameters for creating a payment source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSource {
    pub amount: i64,
    pub currency: Currency,
    pub source_type: SourceType,
}

/// A source created by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub id: String,
}

/// Parameters for creating a charge against an existing source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCharge {
    pub amount: i64,
    pub currency: Currency,
    pub return_uri: String,
    pub source_id: String,
}

/// A charge created by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charge {
    pub id: String,
    /// Redirect URL for completing authorization out-of-band.
    pub authorize_uri: String,
}

/// Port trait for the payment gateway.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Creates a funding source for the given amount and channel.
    async fn create_source(&self, req: CreateSource) -> Result<Source, GatewayError>;

    /// Creates a charge that draws from a previously created source.
    async fn create_charge(&self, req: CreateCharge) -> Result<Charge, GatewayError>;
}
