//! # Payments Types
//!
//! Domain types and port traits for the payment charge service.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Currency, SourceType, PaymentRecord, PaymentEvent)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ChargeData, ChargeLimits, Currency, EventKind, EventSource, PaymentEvent, PaymentRecord,
    SourceType,
};
pub use dto::*;
pub use error::{AppError, DomainError, PaymentError, RepoError};
pub use ports::{
    Charge, CreateCharge, CreateSource, GatewayError, PaymentGateway, PaymentStore, Source,
};
