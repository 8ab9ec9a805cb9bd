use sqlx::PgPool;
use storage::{
    dto::checkin::{AttendanceStatsResponse, QrScanResponse},
    models::Registration,
    repository::registration::RegistrationRepository,
    services::qr_token,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// First half of the two-step venue flow: authenticate the scanned payload
/// and tell the operator whether a check-in would be accepted.
pub async fn scan(pool: &PgPool, qr_data: &str, secret: &str) -> WebResult<QrScanResponse> {
    let Some(registration_id) = qr_token::verify(qr_data, secret) else {
        return Err(WebError::BadRequest("Invalid QR code".to_string()));
    };

    let id = Uuid::parse_str(&registration_id)
        .map_err(|_| WebError::BadRequest("Invalid QR code".to_string()))?;

    let registration = RegistrationRepository::new(pool).find_by_id(id).await?;
    let can_check_in = registration.can_check_in();

    Ok(QrScanResponse {
        valid: true,
        can_check_in,
        registration: registration.into(),
    })
}

/// Second half: commit the check-in. The conditional update rejects unpaid
/// or repeated scans without mutating anything.
pub async fn check_in(pool: &PgPool, registration_id: Uuid) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(pool);

    match repo.check_in(registration_id).await? {
        Some(registration) => {
            tracing::info!(registration_id = %registration.id, "Check-in recorded");
            Ok(registration)
        }
        None => {
            let registration = repo.find_by_id(registration_id).await?;
            if !registration.is_completed() {
                Err(WebError::BadRequest(
                    "Payment is still pending".to_string(),
                ))
            } else {
                Err(WebError::BadRequest(
                    "Registration already checked in".to_string(),
                ))
            }
        }
    }
}

pub async fn attendance(pool: &PgPool) -> WebResult<AttendanceStatsResponse> {
    let counts = RegistrationRepository::new(pool).attendance_counts().await?;

    Ok(AttendanceStatsResponse::new(
        counts.total,
        counts.completed,
        counts.checked_in,
    ))
}
