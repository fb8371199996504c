//! # Omise Gateway
//!
//! Adapter implementing the `PaymentGateway` port against the Omise REST API.
//!
//! Sources are created with the public key and charges with the secret key,
//! both sent as the HTTP basic auth username. Responses are mapped straight
//! onto the port types; there is no retry and no timeout beyond the
//! `reqwest` defaults.

use payments_types::{Charge, CreateCharge, CreateSource, GatewayError, PaymentGateway, Source};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Production Omise API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.omise.co";

/// Omise REST client.
pub struct OmiseGateway {
    base_url: String,
    public_key: String,
    secret_key: String,
    http: Client,
}

#[derive(Serialize)]
struct SourceBody<'a> {
    amount: i64,
    currency: &'a str,
    #[serde(rename = "type")]
    source_type: &'a str,
}

#[derive(Serialize)]
struct ChargeBody<'a> {
    amount: i64,
    currency: &'a str,
    return_uri: &'a str,
    source: &'a str,
}

#[derive(Deserialize)]
struct SourceObject {
    id: String,
}

#[derive(Deserialize)]
struct ChargeObject {
    id: String,
    #[serde(default)]
    authorize_uri: Option<String>,
}

/// Error object returned by Omise on non-2xx responses.
#[derive(Deserialize)]
struct ErrorObject {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl OmiseGateway {
    /// Creates a client for the production API.
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            public_key: public_key.into(),
            secret_key: secret_key.into(),
            http: Client::new(),
        }
    }

    /// Points the client at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        key: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .basic_auth(key, None::<&str>)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str(&text)
                .map_err(|e| GatewayError::InvalidResponse(e.to_string()));
        }

        let (code, message) = match serde_json::from_str::<ErrorObject>(&text) {
            Ok(err) => (err.code, err.message),
            Err(_) => (String::new(), text),
        };
        tracing::warn!(%status, %code, path, "omise request rejected");

        Err(GatewayError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }
}

#[async_trait::async_trait]
impl PaymentGateway for OmiseGateway {
    #[tracing::instrument(skip(self), fields(amount = req.amount, currency = %req.currency))]
    async fn create_source(&self, req: CreateSource) -> Result<Source, GatewayError> {
        let body = SourceBody {
            amount: req.amount,
            currency: req.currency.as_str(),
            source_type: req.source_type.as_str(),
        };

        let source: SourceObject = self.post("/sources", &self.public_key, &body).await?;
        tracing::debug!(source_id = %source.id, "source created");

        Ok(Source { id: source.id })
    }

    #[tracing::instrument(skip(self), fields(amount = req.amount, source_id = %req.source_id))]
    async fn create_charge(&self, req: CreateCharge) -> Result<Charge, GatewayError> {
        let body = ChargeBody {
            amount: req.amount,
            currency: req.currency.as_str(),
            return_uri: &req.return_uri,
            source: &req.source_id,
        };

        let charge: ChargeObject = self.post("/charges", &self.secret_key, &body).await?;
        tracing::debug!(charge_id = %charge.id, "charge created");

        Ok(Charge {
            id: charge.id,
            authorize_uri: charge.authorize_uri.unwrap_or_default(),
        })
    }
}
