use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// How the platform takes its cut of each completed payment.
pub mod commission_mode {
    pub const PERCENTAGE: &str = "percentage";
    pub const FIXED: &str = "fixed";

    pub fn is_valid(mode: &str) -> bool {
        mode == PERCENTAGE || mode == FIXED
    }
}

/// Platform-wide commission settings plus the platform's own fallback
/// gateway credentials. Singleton row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PlatformConfig {
    pub commission_type: String,
    pub commission_value: Decimal,
    pub mp_access_token: Option<String>,
    pub mp_public_key: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// The organizer's own gateway credentials; blank means "use the platform
/// fallback". Singleton row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventPaymentConfig {
    pub mp_access_token: Option<String>,
    pub mp_public_key: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl EventPaymentConfig {
    pub fn access_token(&self) -> Option<&str> {
        self.mp_access_token.as_deref().filter(|t| !t.is_empty())
    }
}

impl PlatformConfig {
    pub fn access_token(&self) -> Option<&str> {
        self.mp_access_token.as_deref().filter(|t| !t.is_empty())
    }
}
