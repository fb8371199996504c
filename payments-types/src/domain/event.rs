//! Gateway webhook event envelope.
//!
//! Omise posts the full event object to the webhook endpoint. Only a handful
//! of fields drive behaviour; everything else is ignored. Fields the gateway
//! sends as `null` decode to their defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

pub const CHARGE_CREATE: &str = "charge.create";
pub const CHARGE_COMPLETE: &str = "charge.complete";

/// What a webhook event asks the service to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    ChargeCreate,
    ChargeComplete,
    /// Any key this service does not act on.
    Ignored,
}

/// Webhook event as delivered by the gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PaymentEvent {
    /// Event ID (`evnt_...`)
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "evnt_test_5xyz")]
    pub id: String,
    /// Event key, e.g. `charge.create` or `charge.complete`
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "charge.complete")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub livemode: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ChargeData,
}

/// The charge object carried in `data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ChargeData {
    /// Charge ID (`chrg_...`)
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "successful")]
    pub status: String,
    /// Transaction ID, null until the charge completes
    #[serde(default, deserialize_with = "null_as_default")]
    pub transaction: String,
    #[serde(default)]
    pub source: Option<EventSource>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub failure_code: Option<String>,
    #[serde(default)]
    pub failure_message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EventSource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

impl PaymentEvent {
    pub fn kind(&self) -> EventKind {
        match self.key.as_str() {
            CHARGE_CREATE => EventKind::ChargeCreate,
            CHARGE_COMPLETE => EventKind::ChargeComplete,
            _ => EventKind::Ignored,
        }
    }

    pub fn charge_id(&self) -> &str {
        &self.data.id
    }

    pub fn source_id(&self) -> &str {
        self.data.source.as_ref().map_or("", |s| s.id.as_str())
    }

    pub fn txn_id(&self) -> Option<&str> {
        Some(self.data.transaction.as_str()).filter(|id| !id.is_empty())
    }

    pub fn status(&self) -> &str {
        &self.data.status
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
