//! # Payments Client SDK
//!
//! A typed Rust client for the payment charge API.

use payments_types::{Currency, PaymentRequest, PaymentRequestResult, PaymentStatus, SourceType};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Payments API client.
pub struct PaymentsClient {
    base_url: String,
    http: Client,
}

impl PaymentsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Starts a payment and returns the gateway charge, source and redirect URL.
    pub async fn create_payment(
        &self,
        amount: i64,
        currency: Currency,
        return_uri: &str,
        source_type: SourceType,
    ) -> Result<PaymentRequestResult, ClientError> {
        let req = PaymentRequest {
            amount,
            currency,
            return_uri: return_uri.to_string(),
            source_type,
        };
        let resp = self
            .http
            .post(format!("{}/payments/", self.base_url))
            .json(&req)
            .send()
            .await?;
        let body = Self::check(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Gets the stored status of a charge.
    pub async fn get_payment_status(&self, charge_id: &str) -> Result<PaymentStatus, ClientError> {
        let url = self.url(&["payments", "charges", charge_id, "status"])?;
        self.get(url).await
    }

    /// Posts a gateway event payload to the webhook endpoint.
    pub async fn send_omise_event(&self, event: &serde_json::Value) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(format!("{}/webhook/omise", self.base_url))
            .json(event)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Appends percent-encoded path segments to the base URL.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let invalid = || ClientError::InvalidUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let resp = self.http.get(url).send().await?;
        let body = Self::check(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Returns the body of a successful response, or the API error message.
    async fn check(resp: reqwest::Response) -> Result<String, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.text().await?);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
