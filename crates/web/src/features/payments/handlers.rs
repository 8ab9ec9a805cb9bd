use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePreferenceRequest {
    pub registration_id: Uuid,
}

#[utoipa::path(
    post,
    path = "/api/payments/create-preference",
    request_body = CreatePreferenceRequest,
    responses(
        (status = 200, description = "Checkout link created"),
        (status = 400, description = "Registration is already paid"),
        (status = 404, description = "Registration not found"),
        (status = 502, description = "Payment gateway failure")
    ),
    tag = "payments"
)]
pub async fn create_preference(
    State(state): State<AppState>,
    Json(req): Json<CreatePreferenceRequest>,
) -> Result<Response, WebError> {
    let link = services::create_checkout_link(&state, req.registration_id).await?;

    Ok(Json(serde_json::json!({
        "preference_id": link.preference_id,
        "init_point": link.init_point,
    }))
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/payments/verify/{registration_id}",
    params(
        ("registration_id" = Uuid, Path, description = "Registration id")
    ),
    responses(
        (status = 200, description = "Current payment status after polling the gateway"),
        (status = 404, description = "Registration not found"),
        (status = 502, description = "Payment gateway failure")
    ),
    tag = "payments"
)]
pub async fn verify_payment(
    State(state): State<AppState>,
    Path(registration_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let registration = services::verify_payment(&state, registration_id).await?;

    Ok(Json(serde_json::json!({
        "registration_id": registration.id,
        "status": registration.payment_status,
    }))
    .into_response())
}

/// The gateway retries on anything but a 2xx, so processing failures are
/// swallowed here and only logged.
#[utoipa::path(
    post,
    path = "/api/payments/webhook",
    responses(
        (status = 200, description = "Notification acknowledged")
    ),
    tag = "payments"
)]
pub async fn webhook(State(state): State<AppState>, body: String) -> StatusCode {
    if let Err(error) = services::process_webhook(&state, &body).await {
        tracing::error!(%error, "Webhook processing failed");
    }

    StatusCode::OK
}
