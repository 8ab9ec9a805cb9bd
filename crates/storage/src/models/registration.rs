use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Payment states a registration moves through. Stored as plain text.
pub mod payment_status {
    pub const PENDING: &str = "pending";
    pub const COMPLETED: &str = "completed";
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
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
    pub commission: Decimal,
    pub net_to_organizer: Decimal,
    pub payment_status: String,
    pub preference_id: Option<String>,
    pub payment_id: Option<String>,
    pub qr_payload: String,
    pub check_in: bool,
    pub check_in_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    /// A fully discounted registration needs no gateway round-trip and is
    /// born completed.
    pub fn initial_status(final_price: Decimal) -> &'static str {
        if final_price.is_zero() {
            payment_status::COMPLETED
        } else {
            payment_status::PENDING
        }
    }

    pub fn is_completed(&self) -> bool {
        self.payment_status == payment_status::COMPLETED
    }

    /// Check-in requires a confirmed payment and may only happen once.
    pub fn can_check_in(&self) -> bool {
        self.is_completed() && !self.check_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(status: &str, check_in: bool) -> Registration {
        Registration {
            id: Uuid::new_v4(),
            first_name: "Test".to_string(),
            last_name: "Piloto".to_string(),
            national_id: "123456789".to_string(),
            competition_number: "99".to_string(),
            phone: "3001234567".to_string(),
            email: "piloto@example.com".to_string(),
            categories: vec!["INFANTIL".to_string()],
            league: None,
            coupon_code: None,
            base_price: Decimal::from(100_000),
            discount: Decimal::ZERO,
            final_price: Decimal::from(100_000),
            commission: Decimal::from(5_000),
            net_to_organizer: Decimal::from(95_000),
            payment_status: status.to_string(),
            preference_id: None,
            payment_id: None,
            qr_payload: String::new(),
            check_in,
            check_in_time: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn free_registration_starts_completed() {
        assert_eq!(
            Registration::initial_status(Decimal::ZERO),
            payment_status::COMPLETED
        );
    }

    #[test]
    fn paid_registration_starts_pending() {
        assert_eq!(
            Registration::initial_status(Decimal::from(70_000)),
            payment_status::PENDING
        );
    }

    #[test]
    fn check_in_requires_completed_payment() {
        assert!(!registration(payment_status::PENDING, false).can_check_in());
        assert!(registration(payment_status::COMPLETED, false).can_check_in());
    }

    #[test]
    fn check_in_happens_at_most_once() {
        assert!(!registration(payment_status::COMPLETED, true).can_check_in());
    }
}
