//! Payment status store port.
//!
//! Adapters (SQLite, in-memory doubles) implement this trait.

use crate::domain::PaymentRecord;
use crate::error::RepoError;

/// Persistence for charge status rows.
///
/// Every method is a single statement; nothing spans calls.
#[async_trait::async_trait]
pub trait PaymentStore: Send + Sync + 'static {
    /// Inserts a new record. Fails with `RepoError::Conflict` if the charge ID exists.
    async fn insert_payment(&self, record: &PaymentRecord) -> Result<(), RepoError>;

    /// Sets `txn_id` and `status` for a charge, returning the rows affected.
    async fn update_payment(
        &self,
        charge_id: &str,
        txn_id: Option<&str>,
        status: &str,
    ) -> Result<u64, RepoError>;

    /// Gets a record by charge ID.
    async fn find_payment(&self, charge_id: &str) -> Result<Option<PaymentRecord>, RepoError>;
}
