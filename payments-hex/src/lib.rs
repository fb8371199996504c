//! # Payments Hex
//!
//! Application service layer and HTTP adapter for the payment charge service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validation, gateway calls, webhook events)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi` - OpenAPI document served at `/swagger-ui`
//!
//! The service is generic over `G: PaymentGateway` and `S: PaymentStore`,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::PaymentService;
