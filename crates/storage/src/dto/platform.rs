use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{EventPaymentConfig, PlatformConfig, commission_mode};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlatformConfigResponse {
    pub commission_type: String,
    pub commission_value: Decimal,
    pub mp_public_key: Option<String>,
    pub has_access_token: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<PlatformConfig> for PlatformConfigResponse {
    fn from(config: PlatformConfig) -> Self {
        let has_access_token = config.access_token().is_some();
        Self {
            commission_type: config.commission_type,
            commission_value: config.commission_value,
            mp_public_key: config.mp_public_key,
            has_access_token,
            updated_at: config.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePlatformConfigRequest {
    #[validate(custom(function = "validate_commission_mode"))]
    pub commission_type: String,

    #[validate(custom(function = "validate_commission_value"))]
    pub commission_value: Decimal,

    #[validate(length(max = 255))]
    pub mp_access_token: Option<String>,

    #[validate(length(max = 255))]
    pub mp_public_key: Option<String>,
}

impl UpdatePlatformConfigRequest {
    /// Percentage mode additionally caps the value at 100.
    pub fn validate_value_for_mode(&self) -> Result<(), String> {
        if self.commission_type == commission_mode::PERCENTAGE
            && self.commission_value > Decimal::ONE_HUNDRED
        {
            return Err("Percentage commission cannot exceed 100".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventPaymentConfigResponse {
    pub mp_public_key: Option<String>,
    pub has_access_token: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<EventPaymentConfig> for EventPaymentConfigResponse {
    fn from(config: EventPaymentConfig) -> Self {
        let has_access_token = config.access_token().is_some();
        Self {
            mp_public_key: config.mp_public_key,
            has_access_token,
            updated_at: config.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventPaymentConfigRequest {
    #[validate(length(max = 255))]
    pub mp_access_token: Option<String>,

    #[validate(length(max = 255))]
    pub mp_public_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommissionStatsResponse {
    pub commission_type: String,
    pub commission_value: Decimal,
    pub total_commission: Decimal,
    pub total_net_to_organizer: Decimal,
    pub total_collected: Decimal,
    pub completed_count: i64,
}

fn validate_commission_mode(mode: &str) -> Result<(), validator::ValidationError> {
    if commission_mode::is_valid(mode) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_commission_mode"))
    }
}

fn validate_commission_value(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_negative() {
        return Err(validator::ValidationError::new("negative_commission"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mode: &str, value: i64) -> UpdatePlatformConfigRequest {
        UpdatePlatformConfigRequest {
            commission_type: mode.to_string(),
            commission_value: Decimal::from(value),
            mp_access_token: None,
            mp_public_key: None,
        }
    }

    #[test]
    fn unknown_commission_mode_is_rejected() {
        assert!(request("tithe", 5).validate().is_err());
    }

    #[test]
    fn percentage_above_one_hundred_is_rejected() {
        let req = request(commission_mode::PERCENTAGE, 120);

        assert!(req.validate_value_for_mode().is_err());
    }

    #[test]
    fn fixed_commission_may_exceed_one_hundred() {
        let req = request(commission_mode::FIXED, 10_000);

        assert!(req.validate().is_ok());
        assert!(req.validate_value_for_mode().is_ok());
    }
}
