//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use payments_types::{
    AppError, ErrorResponse, PaymentEvent, PaymentGateway, PaymentRequest, PaymentStore,
};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<G: PaymentGateway, S: PaymentStore> {
    pub service: PaymentService<G, S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<payments_types::PaymentError> for ApiError {
    fn from(err: payments_types::PaymentError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            // Unknown charges are reported as a client error, not 404.
            AppError::NotFound(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

fn invalid_payload(rejection: JsonRejection) -> ApiError {
    tracing::warn!(error = %rejection.body_text(), "rejected request body");
    AppError::BadRequest("invalid request payload".into()).into()
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Start a payment: create a gateway source and charge.
#[tracing::instrument(skip(state, payload))]
pub async fn create_payment<G: PaymentGateway, S: PaymentStore>(
    State(state): State<Arc<AppState<G, S>>>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(invalid_payload)?;
    let result = state.service.create_payment_request(req).await?;
    Ok(Json(result))
}

/// Get the stored status of a charge.
#[tracing::instrument(skip(state))]
pub async fn get_payment_status<G: PaymentGateway, S: PaymentStore>(
    State(state): State<Arc<AppState<G, S>>>,
    Path(charge_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let status = state.service.get_payment_status(&charge_id).await?;
    Ok(Json(status))
}

/// Receive a gateway webhook event.
// TODO: verify the event source before applying it (Omise publishes its webhook IP ranges).
#[tracing::instrument(skip(state, payload))]
pub async fn omise_webhook<G: PaymentGateway, S: PaymentStore>(
    State(state): State<Arc<AppState<G, S>>>,
    payload: Result<Json<PaymentEvent>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(event) = payload.map_err(invalid_payload)?;
    state.service.hook_payment_event(event).await?;
    Ok(StatusCode::OK)
}
