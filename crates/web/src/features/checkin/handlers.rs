use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::checkin::{
    AttendanceStatsResponse, CheckInRequest, QrScanRequest, QrScanResponse,
};
use storage::dto::registration::RegistrationResponse;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/qr/scan",
    request_body = QrScanRequest,
    responses(
        (status = 200, description = "QR authenticated; preview returned", body = QrScanResponse),
        (status = 400, description = "Invalid QR code"),
        (status = 404, description = "Registration not found")
    ),
    tag = "checkin"
)]
pub async fn scan_qr(
    State(state): State<AppState>,
    Json(req): Json<QrScanRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let preview = services::scan(state.db.pool(), &req.qr_data, &state.config.qr_secret).await?;

    Ok(Json(preview).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/check-in",
    request_body = CheckInRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Check-in recorded", body = RegistrationResponse),
        (status = 400, description = "Payment pending or already checked in"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Registration not found")
    ),
    tag = "checkin"
)]
pub async fn check_in(
    State(state): State<AppState>,
    Json(req): Json<CheckInRequest>,
) -> Result<Response, WebError> {
    let registration = services::check_in(state.db.pool(), req.registration_id).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/attendance",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Attendance totals", body = AttendanceStatsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "checkin"
)]
pub async fn attendance_stats(State(state): State<AppState>) -> Result<Response, WebError> {
    let stats = services::attendance(state.db.pool()).await?;

    Ok(Json(stats).into_response())
}
