//! Charge currency and its per-currency charge limits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum THB charge in satang (20.00 THB).
pub const CHARGE_LIMIT_THB_MIN: i64 = 2_000;

/// Maximum THB charge in satang (150,000.00 THB).
pub const CHARGE_LIMIT_THB_MAX: i64 = 15_000_000;

/// Currency of a charge request.
///
/// Any string deserializes; values other than the supported ones land in
/// `Unsupported` so validation can reject them with a proper error instead of
/// failing at the JSON layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    Thb,
    Unsupported(String),
}

/// Inclusive bounds for a single charge, in the currency's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeLimits {
    pub min: i64,
    pub max: i64,
}

impl Currency {
    /// Returns the wire code (`thb`, or the raw unsupported value).
    pub fn as_str(&self) -> &str {
        match self {
            Currency::Thb => "thb",
            Currency::Unsupported(raw) => raw,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Currency::Unsupported(_))
    }

    /// Charge limits the gateway enforces for this currency.
    pub fn charge_limits(&self) -> Option<ChargeLimits> {
        match self {
            Currency::Thb => Some(ChargeLimits {
                min: CHARGE_LIMIT_THB_MIN,
                max: CHARGE_LIMIT_THB_MAX,
            }),
            Currency::Unsupported(_) => None,
        }
    }
}

impl From<String> for Currency {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "thb" => Currency::Thb,
            _ => Currency::Unsupported(raw),
        }
    }
}

impl From<&str> for Currency {
    fn from(raw: &str) -> Self {
        Currency::from(raw.to_string())
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        match currency {
            Currency::Thb => "thb".to_string(),
            Currency::Unsupported(raw) => raw,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
