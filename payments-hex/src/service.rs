//! Payment Application Service
//!
//! Validates charge requests, drives the gateway port, and applies webhook
//! events to the store port. Contains NO infrastructure logic.

use payments_types::{
    CreateCharge, CreateSource, DomainError, EventKind, PaymentError, PaymentEvent,
    PaymentGateway, PaymentRecord, PaymentRequest, PaymentRequestResult, PaymentStatus,
    PaymentStore,
};

/// Application service for payment operations.
///
/// Generic over the gateway and the store - both adapters are injected at
/// construction, so tests can substitute in-memory doubles.
pub struct PaymentService<G: PaymentGateway, S: PaymentStore> {
    gateway: G,
    store: S,
}

impl<G: PaymentGateway, S: PaymentStore> PaymentService<G, S> {
    /// Creates a new payment service with the given gateway and store.
    pub fn new(gateway: G, store: S) -> Self {
        Self { gateway, store }
    }

    #[cfg(test)]
    pub(crate) fn gateway(&self) -> &G {
        &self.gateway
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Charge creation
    // ─────────────────────────────────────────────────────────────────────────────

    /// Validates the request, then creates a source and a charge on the gateway.
    ///
    /// Nothing is persisted here; the record appears once the gateway sends
    /// `charge.create`.
    #[tracing::instrument(skip(self), fields(amount = req.amount, currency = %req.currency))]
    pub async fn create_payment_request(
        &self,
        req: PaymentRequest,
    ) -> Result<PaymentRequestResult, PaymentError> {
        validate(&req)?;

        let source = self
            .gateway
            .create_source(CreateSource {
                amount: req.amount,
                currency: req.currency.clone(),
                source_type: req.source_type,
            })
            .await?;

        let charge = self
            .gateway
            .create_charge(CreateCharge {
                amount: req.amount,
                currency: req.currency,
                return_uri: req.return_uri,
                source_id: source.id.clone(),
            })
            .await?;

        tracing::info!(charge_id = %charge.id, source_id = %source.id, "charge created");

        Ok(PaymentRequestResult {
            charge_id: charge.id,
            source_id: source.id,
            authorize_uri: charge.authorize_uri,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Status
    // ─────────────────────────────────────────────────────────────────────────────

    /// Gets the stored status of a charge.
    #[tracing::instrument(skip(self))]
    pub async fn get_payment_status(&self, charge_id: &str) -> Result<PaymentStatus, PaymentError> {
        if charge_id.trim().is_empty() {
            return Err(DomainError::MissingChargeId.into());
        }

        self.store
            .find_payment(charge_id)
            .await?
            .map(|record| PaymentStatus {
                status: record.status,
            })
            .ok_or(PaymentError::NotFound)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Webhook events
    // ─────────────────────────────────────────────────────────────────────────────

    /// Applies a gateway webhook event to the store.
    ///
    /// Keys other than `charge.create` and `charge.complete` are accepted and
    /// ignored.
    #[tracing::instrument(skip(self, event), fields(key = %event.key, charge_id = %event.charge_id()))]
    pub async fn hook_payment_event(&self, event: PaymentEvent) -> Result<(), PaymentError> {
        match event.kind() {
            EventKind::ChargeCreate => {
                let record = PaymentRecord::new(
                    event.charge_id(),
                    event.source_id(),
                    event.txn_id().map(str::to_string),
                    event.status(),
                );
                self.store.insert_payment(&record).await?;
                tracing::info!(status = %record.status, "payment recorded");
            }
            EventKind::ChargeComplete => {
                let affected = self
                    .store
                    .update_payment(event.charge_id(), event.txn_id(), event.status())
                    .await?;
                if affected == 0 {
                    tracing::debug!("charge.complete for unknown charge");
                } else {
                    tracing::info!(status = %event.status(), "payment updated");
                }
            }
            EventKind::Ignored => {
                tracing::debug!("event ignored");
            }
        }

        Ok(())
    }
}

/// Checks currency, charge limits and source type, in that order.
fn validate(req: &PaymentRequest) -> Result<(), DomainError> {
    let limits = req
        .currency
        .charge_limits()
        .ok_or(DomainError::InvalidCurrency)?;

    if req.amount < limits.min {
        return Err(DomainError::AmountBelowLimit {
            min: limits.min,
            requested: req.amount,
        });
    }

    if req.amount > limits.max {
        return Err(DomainError::ChargeLimitExceeded {
            max: limits.max,
            requested: req.amount,
        });
    }

    if !req.source_type.is_supported() {
        return Err(DomainError::InvalidSourceType);
    }

    Ok(())
}
