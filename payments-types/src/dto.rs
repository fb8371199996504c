//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Currency, SourceType};

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to start a payment through the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount in the smallest currency unit (satang for THB)
    #[schema(example = 20000)]
    pub amount: i64,
    #[schema(value_type = String, example = "thb")]
    pub currency: Currency,
    /// Where the gateway redirects the payer after authorization
    #[schema(example = "https://example.com/orders/42")]
    pub return_uri: String,
    #[schema(value_type = String, example = "internet_banking_scb")]
    pub source_type: SourceType,
}

/// Identifiers returned by the gateway for a new charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestResult {
    #[schema(example = "chrg_test_5abc")]
    pub charge_id: String,
    #[schema(example = "src_test_5ghi")]
    pub source_id: String,
    /// Redirect URL the payer visits to authorize the charge
    #[schema(example = "https://pay.omise.co/offsites/ofsp_test/pay")]
    pub authorize_uri: String,
}

/// Current status of a charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentStatus {
    #[schema(example = "successful")]
    pub status: String,
}

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "invalid currency")]
    pub message: String,
}
