use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Registration;
use crate::services::pricing::PriceQuote;
use crate::services::qr_token;

/// Request payload for creating a registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationRequest {
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 5, max = 32, message = "National ID must be at least 5 characters"))]
    pub national_id: String,

    #[validate(length(min = 1, max = 16, message = "Competition number is required"))]
    pub competition_number: String,

    #[validate(length(min = 7, max = 32, message = "Phone must be at least 7 digits"))]
    pub phone: String,

    #[validate(email(message = "Email address is not valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "At least one category must be selected"))]
    pub categories: Vec<String>,

    #[validate(length(max = 255))]
    pub league: Option<String>,

    #[validate(length(max = 64))]
    pub coupon_code: Option<String>,
}

/// Request payload for a price quote
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PriceQuoteRequest {
    #[validate(length(min = 1, message = "At least one category must be selected"))]
    pub categories: Vec<String>,

    #[validate(length(max = 64))]
    pub coupon_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PriceQuoteResponse {
    pub base_price: Decimal,
    pub discount: Decimal,
    pub final_price: Decimal,
    pub phase: String,
    pub discount_percent: i32,
}

impl From<PriceQuote> for PriceQuoteResponse {
    fn from(quote: PriceQuote) -> Self {
        Self {
            base_price: quote.base_price,
            discount: quote.discount,
            final_price: quote.final_price,
            phase: quote.phase.as_str().to_string(),
            discount_percent: quote.discount_percent,
        }
    }
}

/// Full registration record as returned to clients, including the QR
/// payload and a renderable image URL for it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegistrationResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub competition_number: String,
    pub phone: String,
    pub email: String,
    pub categories: Vec<String>,
    pub league: Option<String>,
    pub coupon_code: Option<String>,
    pub base_price: Decimal,
    pub discount: Decimal,
    pub final_price: Decimal,
    pub payment_status: String,
    pub qr_payload: String,
    pub qr_image_url: String,
    pub check_in: bool,
    pub check_in_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Registration> for RegistrationResponse {
    fn from(reg: Registration) -> Self {
        let qr_image_url = qr_token::image_url(&reg.qr_payload);
        Self {
            id: reg.id,
            first_name: reg.first_name,
            last_name: reg.last_name,
            national_id: reg.national_id,
            competition_number: reg.competition_number,
            phone: reg.phone,
            email: reg.email,
            categories: reg.categories,
            league: reg.league,
            coupon_code: reg.coupon_code,
            base_price: reg.base_price,
            discount: reg.discount,
            final_price: reg.final_price,
            payment_status: reg.payment_status,
            qr_payload: reg.qr_payload,
            qr_image_url,
            check_in: reg.check_in,
            check_in_time: reg.check_in_time,
            created_at: reg.created_at,
        }
    }
}

/// Admin view including the commission columns hidden from pilots.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegistrationAdminResponse {
    #[serde(flatten)]
    pub registration: RegistrationResponse,
    pub commission: Decimal,
    pub net_to_organizer: Decimal,
    pub preference_id: Option<String>,
    pub payment_id: Option<String>,
}

impl From<Registration> for RegistrationAdminResponse {
    fn from(reg: Registration) -> Self {
        let commission = reg.commission;
        let net_to_organizer = reg.net_to_organizer;
        let preference_id = reg.preference_id.clone();
        let payment_id = reg.payment_id.clone();
        Self {
            registration: reg.into(),
            commission,
            net_to_organizer,
            preference_id,
            payment_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationListResponse {
    pub registrations: Vec<RegistrationAdminResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BulkDeleteRequest {
    #[validate(length(min = 1, message = "At least one registration id is required"))]
    pub ids: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    fn request() -> CreateRegistrationRequest {
        CreateRegistrationRequest {
            first_name: "Test".to_string(),
            last_name: "Piloto".to_string(),
            national_id: "123456789".to_string(),
            competition_number: "99".to_string(),
            phone: "3001234567".to_string(),
            email: "test@example.com".to_string(),
            categories: vec!["INFANTIL".to_string()],
            league: None,
            coupon_code: None,
        }
    }

    #[test]
    fn valid_request_passes_validation() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut req = request();
        req.email = "not-an-email".to_string();

        assert!(req.validate().is_err());
    }

    #[test]
    fn empty_category_list_is_rejected() {
        let mut req = request();
        req.categories.clear();

        assert!(req.validate().is_err());
    }
}
