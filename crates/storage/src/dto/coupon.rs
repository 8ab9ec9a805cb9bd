use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Coupon;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ValidateCouponRequest {
    #[validate(length(min = 1, max = 64, message = "Coupon code is required"))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidateCouponResponse {
    pub valid: bool,
    pub discount_percent: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCouponRequest {
    #[validate(length(min = 1, max = 64, message = "Coupon code is required"))]
    pub code: String,

    #[validate(range(min = 0, max = 100, message = "Discount must be between 0 and 100"))]
    pub discount_percent: i32,

    #[validate(range(min = 1, message = "Maximum uses must be positive"))]
    pub max_uses: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCouponRequest {
    pub active: Option<bool>,

    #[validate(range(min = 1, message = "Maximum uses must be positive"))]
    pub max_uses: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CouponResponse {
    pub id: Uuid,
    pub code: String,
    pub discount_percent: i32,
    pub max_uses: Option<i32>,
    pub use_count: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Coupon> for CouponResponse {
    fn from(coupon: Coupon) -> Self {
        Self {
            id: coupon.id,
            code: coupon.code,
            discount_percent: coupon.discount_percent,
            max_uses: coupon.max_uses,
            use_count: coupon.use_count,
            active: coupon.active,
            created_at: coupon.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CouponListResponse {
    pub coupons: Vec<CouponResponse>,
}
