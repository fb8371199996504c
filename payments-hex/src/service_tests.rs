//! PaymentService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use payments_types::{
        Charge, CreateCharge, CreateSource, Currency, DomainError, GatewayError, PaymentError,
        PaymentEvent, PaymentGateway, PaymentRecord, PaymentRequest, PaymentRequestResult,
        PaymentStore, RepoError, Source, SourceType,
    };
    use payments_types::domain::{CHARGE_LIMIT_THB_MAX, CHARGE_LIMIT_THB_MIN};

    use crate::PaymentService;

    /// Gateway double that records calls and answers with fixed IDs.
    pub struct MockGateway {
        source_id: String,
        charge: Charge,
        fail_charge: bool,
        pub sources: Mutex<Vec<CreateSource>>,
        pub charges: Mutex<Vec<CreateCharge>>,
    }

    impl MockGateway {
        pub fn new() -> Self {
            Self {
                source_id: "source_xxx".into(),
                charge: Charge {
                    id: "charge_xxx".into(),
                    authorize_uri: "https://example.com/pay".into(),
                },
                fail_charge: false,
                sources: Mutex::new(Vec::new()),
                charges: Mutex::new(Vec::new()),
            }
        }

        pub fn failing_charge() -> Self {
            Self {
                fail_charge: true,
                ..Self::new()
            }
        }

        fn calls(&self) -> usize {
            self.sources.lock().unwrap().len() + self.charges.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PaymentGateway for MockGateway {
        async fn create_source(&self, req: CreateSource) -> Result<Source, GatewayError> {
            self.sources.lock().unwrap().push(req);
            Ok(Source {
                id: self.source_id.clone(),
            })
        }

        async fn create_charge(&self, req: CreateCharge) -> Result<Charge, GatewayError> {
            self.charges.lock().unwrap().push(req);
            if self.fail_charge {
                return Err(GatewayError::Api {
                    status: 400,
                    code: "invalid_charge".into(),
                    message: "source was already used".into(),
                });
            }
            Ok(self.charge.clone())
        }
    }

    /// Simple in-memory store for testing the service layer.
    pub struct MockStore {
        rows: Mutex<HashMap<String, PaymentRecord>>,
    }

    impl MockStore {
        pub fn new() -> Self {
            Self {
                rows: Mutex::new(HashMap::new()),
            }
        }

        fn get(&self, charge_id: &str) -> Option<PaymentRecord> {
            self.rows.lock().unwrap().get(charge_id).cloned()
        }

        fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PaymentStore for MockStore {
        async fn insert_payment(&self, record: &PaymentRecord) -> Result<(), RepoError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.contains_key(&record.charge_id) {
                return Err(RepoError::Conflict(record.charge_id.clone()));
            }
            rows.insert(record.charge_id.clone(), record.clone());
            Ok(())
        }

        async fn update_payment(
            &self,
            charge_id: &str,
            txn_id: Option<&str>,
            status: &str,
        ) -> Result<u64, RepoError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(charge_id) {
                Some(row) => {
                    row.txn_id = txn_id.map(str::to_string);
                    row.status = status.to_string();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn find_payment(&self, charge_id: &str) -> Result<Option<PaymentRecord>, RepoError> {
            Ok(self.get(charge_id))
        }
    }

    /// Store double whose every call fails.
    struct BrokenStore;

    #[async_trait]
    impl PaymentStore for BrokenStore {
        async fn insert_payment(&self, _record: &PaymentRecord) -> Result<(), RepoError> {
            Err(RepoError::Database("disk I/O error".into()))
        }

        async fn update_payment(
            &self,
            _charge_id: &str,
            _txn_id: Option<&str>,
            _status: &str,
        ) -> Result<u64, RepoError> {
            Err(RepoError::Database("disk I/O error".into()))
        }

        async fn find_payment(&self, _charge_id: &str) -> Result<Option<PaymentRecord>, RepoError> {
            Err(RepoError::Database("disk I/O error".into()))
        }
    }

    fn service() -> PaymentService<MockGateway, MockStore> {
        PaymentService::new(MockGateway::new(), MockStore::new())
    }

    fn request(amount: i64, currency: &str, source_type: &str) -> PaymentRequest {
        PaymentRequest {
            amount,
            currency: Currency::from(currency),
            return_uri: "https://example.com".into(),
            source_type: SourceType::from(source_type),
        }
    }

    fn event(key: &str, charge_id: &str, txn: &str, status: &str) -> PaymentEvent {
        serde_json::from_value(serde_json::json!({
            "key": key,
            "data": {
                "id": charge_id,
                "status": status,
                "transaction": txn,
                "source": { "id": "source_xxx" }
            }
        }))
        .unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // create_payment_request
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_payment_request_success() {
        let service = service();

        let result = service
            .create_payment_request(request(20000, "thb", "internet_banking_scb"))
            .await
            .unwrap();

        assert_eq!(
            result,
            PaymentRequestResult {
                charge_id: "charge_xxx".into(),
                source_id: "source_xxx".into(),
                authorize_uri: "https://example.com/pay".into(),
            }
        );

        let gateway = service.gateway();
        let sources = gateway.sources.lock().unwrap();
        assert_eq!(
            sources[0],
            CreateSource {
                amount: 20000,
                currency: Currency::Thb,
                source_type: SourceType::InternetBankingScb,
            }
        );
        let charges = gateway.charges.lock().unwrap();
        assert_eq!(
            charges[0],
            CreateCharge {
                amount: 20000,
                currency: Currency::Thb,
                return_uri: "https://example.com".into(),
                source_id: "source_xxx".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_create_payment_request_does_not_touch_store() {
        let service = service();

        service
            .create_payment_request(request(20000, "thb", "internet_banking_scb"))
            .await
            .unwrap();

        assert_eq!(service.store().len(), 0);
    }

    #[tokio::test]
    async fn test_amount_below_limit() {
        let service = service();

        for amount in [i64::MIN, -1, 0, 1000, CHARGE_LIMIT_THB_MIN - 1] {
            let err = service
                .create_payment_request(request(amount, "thb", "internet_banking_scb"))
                .await
                .unwrap_err();
            assert!(
                matches!(err, PaymentError::Domain(DomainError::AmountBelowLimit { .. })),
                "amount {} gave {:?}",
                amount,
                err
            );
        }

        assert_eq!(service.gateway().calls(), 0);
    }

    #[tokio::test]
    async fn test_amount_above_limit() {
        let service = service();

        for amount in [CHARGE_LIMIT_THB_MAX + 1, 20_000_000, i64::MAX] {
            let err = service
                .create_payment_request(request(amount, "thb", "internet_banking_scb"))
                .await
                .unwrap_err();
            assert!(
                matches!(err, PaymentError::Domain(DomainError::ChargeLimitExceeded { .. })),
                "amount {} gave {:?}",
                amount,
                err
            );
        }

        assert_eq!(service.gateway().calls(), 0);
    }

    #[tokio::test]
    async fn test_limits_are_inclusive() {
        let service = service();

        for amount in [CHARGE_LIMIT_THB_MIN, CHARGE_LIMIT_THB_MAX] {
            assert!(
                service
                    .create_payment_request(request(amount, "thb", "internet_banking_scb"))
                    .await
                    .is_ok()
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_currency() {
        let service = service();

        for currency in ["test", "usd", "THB", ""] {
            let err = service
                .create_payment_request(request(20000, currency, "internet_banking_scb"))
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                PaymentError::Domain(DomainError::InvalidCurrency)
            ));
        }
        assert_eq!(service.gateway().calls(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_currency_wins_over_amount() {
        let service = service();

        let err = service
            .create_payment_request(request(1, "usd", "internet_banking_scb"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PaymentError::Domain(DomainError::InvalidCurrency)
        ));
    }

    #[tokio::test]
    async fn test_invalid_source_type() {
        let service = service();

        let err = service
            .create_payment_request(request(20000, "thb", "test"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PaymentError::Domain(DomainError::InvalidSourceType)
        ));
        assert_eq!(service.gateway().calls(), 0);
    }

    #[tokio::test]
    async fn test_amount_checked_before_source_type() {
        let service = service();

        let err = service
            .create_payment_request(request(1000, "thb", "test"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PaymentError::Domain(DomainError::AmountBelowLimit { .. })
        ));
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let service = PaymentService::new(MockGateway::failing_charge(), MockStore::new());

        let err = service
            .create_payment_request(request(20000, "thb", "internet_banking_scb"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PaymentError::Gateway(GatewayError::Api { status: 400, .. })
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // get_payment_status
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_get_status_found() {
        let service = service();
        service
            .store()
            .insert_payment(&PaymentRecord::new(
                "charge_xxx",
                "source_xxx",
                None,
                "successful",
            ))
            .await
            .unwrap();

        let status = service.get_payment_status("charge_xxx").await.unwrap();

        assert_eq!(status.status, "successful");
    }

    #[tokio::test]
    async fn test_get_status_not_found() {
        let service = service();

        let err = service.get_payment_status("charge_xxx").await.unwrap_err();

        assert!(matches!(err, PaymentError::NotFound));
    }

    #[tokio::test]
    async fn test_get_status_requires_charge_id() {
        let service = service();

        let err = service.get_payment_status("  ").await.unwrap_err();

        assert!(matches!(
            err,
            PaymentError::Domain(DomainError::MissingChargeId)
        ));
    }

    #[tokio::test]
    async fn test_get_status_storage_fault() {
        let service = PaymentService::new(MockGateway::new(), BrokenStore);

        let err = service.get_payment_status("charge_xxx").await.unwrap_err();

        assert!(matches!(err, PaymentError::Repo(RepoError::Database(_))));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // hook_payment_event
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_charge_create_inserts_record() {
        let service = service();

        service
            .hook_payment_event(event("charge.create", "charge_xxx", "", "pending"))
            .await
            .unwrap();

        let row = service.store().get("charge_xxx").unwrap();
        assert_eq!(row.source_id, "source_xxx");
        assert_eq!(row.txn_id, None);
        assert_eq!(row.status, "pending");
    }

    #[tokio::test]
    async fn test_charge_complete_updates_record() {
        let service = service();
        service
            .hook_payment_event(event("charge.create", "charge_xxx", "", "pending"))
            .await
            .unwrap();

        service
            .hook_payment_event(event(
                "charge.complete",
                "charge_xxx",
                "transaction_xxx",
                "successful",
            ))
            .await
            .unwrap();

        let row = service.store().get("charge_xxx").unwrap();
        assert_eq!(row.txn_id.as_deref(), Some("transaction_xxx"));
        assert_eq!(row.status, "successful");
    }

    #[tokio::test]
    async fn test_charge_complete_failed() {
        let service = service();
        service
            .hook_payment_event(event("charge.create", "charge_xxx", "", "pending"))
            .await
            .unwrap();

        service
            .hook_payment_event(event("charge.complete", "charge_xxx", "", "failed"))
            .await
            .unwrap();

        assert_eq!(service.store().get("charge_xxx").unwrap().status, "failed");
    }

    #[tokio::test]
    async fn test_charge_complete_for_unknown_charge_succeeds() {
        let service = service();

        service
            .hook_payment_event(event("charge.complete", "charge_xxx", "", "failed"))
            .await
            .unwrap();

        assert_eq!(service.store().len(), 0);
    }

    #[tokio::test]
    async fn test_unmatched_key_is_ignored() {
        let service = service();

        service
            .hook_payment_event(event("charge.something", "charge_xxx", "", "pending"))
            .await
            .unwrap();

        assert_eq!(service.store().len(), 0);
    }

    #[tokio::test]
    async fn test_unmatched_key_never_touches_store() {
        let service = PaymentService::new(MockGateway::new(), BrokenStore);

        let result = service
            .hook_payment_event(event("refund.create", "charge_xxx", "", "closed"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_replayed_complete_is_idempotent() {
        let service = service();
        service
            .hook_payment_event(event("charge.create", "charge_xxx", "", "pending"))
            .await
            .unwrap();

        let complete = event("charge.complete", "charge_xxx", "transaction_xxx", "successful");
        service.hook_payment_event(complete.clone()).await.unwrap();
        service.hook_payment_event(complete).await.unwrap();

        let status = service.get_payment_status("charge_xxx").await.unwrap();
        assert_eq!(status.status, "successful");
    }

    #[tokio::test]
    async fn test_replayed_create_fails() {
        let service = service();
        let create = event("charge.create", "charge_xxx", "", "pending");

        service.hook_payment_event(create.clone()).await.unwrap();
        let err = service.hook_payment_event(create).await.unwrap_err();

        assert!(matches!(err, PaymentError::Repo(RepoError::Conflict(_))));
    }
}
