//! Persisted payment record.

use serde::{Deserialize, Serialize};

/// Status row for a single charge, keyed by `charge_id`.
///
/// Created when the gateway reports `charge.create`; `txn_id` and `status`
/// change when it reports `charge.complete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub charge_id: String,
    pub source_id: String,
    /// Gateway transaction ID, absent until the charge completes.
    pub txn_id: Option<String>,
    /// Gateway-defined status (`pending`, `successful`, `failed`, ...).
    pub status: String,
}

impl PaymentRecord {
    pub fn new(
        charge_id: impl Into<String>,
        source_id: impl Into<String>,
        txn_id: Option<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            charge_id: charge_id.into(),
            source_id: source_id.into(),
            txn_id: txn_id.filter(|id| !id.is_empty()),
            status: status.into(),
        }
    }
}
