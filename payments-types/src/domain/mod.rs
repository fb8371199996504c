//! Domain models for the payment charge service.

pub mod currency;
pub mod event;
pub mod payment;
pub mod source;

pub use currency::{CHARGE_LIMIT_THB_MAX, CHARGE_LIMIT_THB_MIN, ChargeLimits, Currency};
pub use event::{ChargeData, EventKind, EventSource, PaymentEvent};
pub use payment::PaymentRecord;
pub use source::SourceType;
