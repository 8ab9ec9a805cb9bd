use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::platform::{
    CommissionStatsResponse, EventPaymentConfigResponse, PlatformConfigResponse,
    UpdateEventPaymentConfigRequest, UpdatePlatformConfigRequest,
};
use storage::dto::registration::{RegistrationAdminResponse, RegistrationListResponse};
use validator::Validate;

use crate::error::WebError;
use crate::features::registrations;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/superadmin/platform-config",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current platform configuration", body = PlatformConfigResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "platform"
)]
pub async fn get_platform_config(State(state): State<AppState>) -> Result<Response, WebError> {
    let config = services::platform_config(state.db.pool()).await?;

    Ok(Json(PlatformConfigResponse::from(config)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/superadmin/platform-config",
    request_body = UpdatePlatformConfigRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Platform configuration updated", body = PlatformConfigResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "platform"
)]
pub async fn update_platform_config(
    State(state): State<AppState>,
    Json(req): Json<UpdatePlatformConfigRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_value_for_mode().map_err(WebError::BadRequest)?;

    let config = services::update_platform_config(state.db.pool(), &req).await?;

    Ok(Json(PlatformConfigResponse::from(config)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/superadmin/event-mercadopago",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Organizer gateway credentials", body = EventPaymentConfigResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "platform"
)]
pub async fn get_event_payment_config(State(state): State<AppState>) -> Result<Response, WebError> {
    let config = services::event_payment_config(state.db.pool()).await?;

    Ok(Json(EventPaymentConfigResponse::from(config)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/superadmin/event-mercadopago",
    request_body = UpdateEventPaymentConfigRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Organizer gateway credentials updated", body = EventPaymentConfigResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "platform"
)]
pub async fn update_event_payment_config(
    State(state): State<AppState>,
    Json(req): Json<UpdateEventPaymentConfigRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let config = services::update_event_payment_config(state.db.pool(), &req).await?;

    Ok(Json(EventPaymentConfigResponse::from(config)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/superadmin/commission-stats",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Commission totals over completed registrations", body = CommissionStatsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "platform"
)]
pub async fn get_commission_stats(State(state): State<AppState>) -> Result<Response, WebError> {
    let stats = services::commission_stats(state.db.pool()).await?;

    Ok(Json(stats).into_response())
}

#[utoipa::path(
    get,
    path = "/api/superadmin/registrations",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All registrations with commission columns", body = RegistrationListResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "platform"
)]
pub async fn list_registrations(State(state): State<AppState>) -> Result<Response, WebError> {
    let registrations = registrations::services::list(state.db.pool()).await?;

    let registrations: Vec<RegistrationAdminResponse> = registrations
        .into_iter()
        .map(RegistrationAdminResponse::from)
        .collect();
    let total = registrations.len();

    Ok(Json(RegistrationListResponse {
        registrations,
        total,
    })
    .into_response())
}
