//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payments_types::domain::{ChargeData, EventSource, PaymentEvent};
use payments_types::dto::{ErrorResponse, PaymentRequest, PaymentRequestResult, PaymentStatus};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Create a gateway source and charge for a payment
#[utoipa::path(
    post,
    path = "/payments/",
    tag = "payments",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Charge created; redirect the payer to authorizeUri", body = PaymentRequestResult),
        (status = 400, description = "Invalid payload, currency, source type or amount", body = ErrorResponse),
        (status = 500, description = "Gateway or internal failure", body = ErrorResponse)
    )
)]
async fn create_payment() {}

/// Get the stored status of a charge
#[utoipa::path(
    get,
    path = "/payments/charges/{charge_id}/status",
    tag = "payments",
    params(
        ("charge_id" = String, Path, description = "Gateway charge ID")
    ),
    responses(
        (status = 200, description = "Current status", body = PaymentStatus),
        (status = 400, description = "Missing or unknown charge ID", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn get_payment_status() {}

/// Receive an Omise webhook event
#[utoipa::path(
    post,
    path = "/webhook/omise",
    tag = "webhooks",
    request_body = PaymentEvent,
    responses(
        (status = 200, description = "Event applied or ignored"),
        (status = 400, description = "Malformed event", body = ErrorResponse),
        (status = 500, description = "Event could not be applied", body = ErrorResponse)
    )
)]
async fn omise_webhook() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Charge Service API",
        version = "1.0.0",
        description = "Creates Omise charges for internet banking payments and tracks their status through Omise webhooks.",
        license(name = "MIT"),
    ),
    paths(health, create_payment, get_payment_status, omise_webhook),
    components(
        schemas(
            PaymentRequest,
            PaymentRequestResult,
            PaymentStatus,
            ErrorResponse,
            PaymentEvent,
            ChargeData,
            EventSource,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Charge creation and status"),
        (name = "webhooks", description = "Gateway callbacks"),
    )
)]
pub struct ApiDoc;
