use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::registration::RegistrationResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct QrScanRequest {
    #[validate(length(min = 1, message = "QR payload is required"))]
    pub qr_data: String,
}

/// Scan preview shown to the operator before the check-in is committed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QrScanResponse {
    pub valid: bool,
    pub can_check_in: bool,
    pub registration: RegistrationResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInRequest {
    pub registration_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttendanceStatsResponse {
    pub total_registrations: i64,
    pub completed: i64,
    pub checked_in: i64,
    pub attendance_rate: f64,
}

impl AttendanceStatsResponse {
    pub fn new(total_registrations: i64, completed: i64, checked_in: i64) -> Self {
        let attendance_rate = if total_registrations > 0 {
            checked_in as f64 / total_registrations as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_registrations,
            completed,
            checked_in,
            attendance_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_rate_is_a_percentage_of_all_registrations() {
        let stats = AttendanceStatsResponse::new(200, 150, 50);

        assert_eq!(stats.attendance_rate, 25.0);
    }

    #[test]
    fn empty_event_has_zero_attendance_rate() {
        let stats = AttendanceStatsResponse::new(0, 0, 0);

        assert_eq!(stats.attendance_rate, 0.0);
    }
}
