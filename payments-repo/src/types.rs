//! Database row types.

use sqlx::FromRow;

use payments_types::PaymentRecord;

/// Payment row from database.
#[derive(FromRow)]
pub struct DbPayment {
    pub charge_id: String,
    pub source_id: String,
    pub txn_id: Option<String>,
    pub status: String,
}

impl DbPayment {
    pub fn into_domain(self) -> PaymentRecord {
        PaymentRecord::new(self.charge_id, self.source_id, self.txn_id, self.status)
    }
}
