use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::registration::{
    BulkDeleteRequest, CreateRegistrationRequest, PriceQuoteRequest, PriceQuoteResponse,
    RegistrationAdminResponse, RegistrationListResponse, RegistrationResponse, UpdateStatusRequest,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/registrations/calculate",
    request_body = PriceQuoteRequest,
    responses(
        (status = 200, description = "Price computed for the selected categories", body = PriceQuoteResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "registrations"
)]
pub async fn calculate_price(
    State(state): State<AppState>,
    Json(req): Json<PriceQuoteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let quote = services::quote(state.db.pool(), &req).await?;

    Ok(Json(PriceQuoteResponse::from(quote)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations",
    request_body = CreateRegistrationRequest,
    responses(
        (status = 201, description = "Registration created with computed prices and QR", body = RegistrationResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "registrations"
)]
pub async fn create_registration(
    State(state): State<AppState>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::create(&state, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::from(registration)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/registrations/{id}",
    params(
        ("id" = Uuid, Path, description = "Registration id")
    ),
    responses(
        (status = 200, description = "Registration found", body = RegistrationResponse),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let registration = services::get(state.db.pool(), id).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/registrations",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All registrations", body = RegistrationListResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "registrations"
)]
pub async fn list_registrations(State(state): State<AppState>) -> Result<Response, WebError> {
    let registrations = services::list(state.db.pool()).await?;

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

#[utoipa::path(
    put,
    path = "/api/registrations/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Registration id")
    ),
    request_body = UpdateStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Status overridden", body = RegistrationResponse),
        (status = 400, description = "Unsupported status"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn override_registration_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::override_status(&state, id, &req.status).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/registrations",
    request_body = BulkDeleteRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Registrations deleted"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "registrations"
)]
pub async fn bulk_delete_registrations(
    State(state): State<AppState>,
    Json(req): Json<BulkDeleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let deleted = services::bulk_delete(state.db.pool(), &req.ids).await?;

    Ok(Json(serde_json::json!({ "deleted": deleted })).into_response())
}
