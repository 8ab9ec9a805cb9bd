use sqlx::PgPool;
use storage::{
    dto::coupon::{CreateCouponRequest, UpdateCouponRequest, ValidateCouponResponse},
    models::Coupon,
    repository::coupon::CouponRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Strict coupon validation: unlike registration creation, an unknown or
/// inactive code is an error here, and an exhausted one is rejected.
pub async fn validate(pool: &PgPool, code: &str) -> WebResult<ValidateCouponResponse> {
    let coupon = CouponRepository::new(pool).find_active_by_code(code).await?;

    if coupon.is_exhausted() {
        return Err(WebError::BadRequest(
            "Coupon has no uses remaining".to_string(),
        ));
    }

    Ok(ValidateCouponResponse {
        valid: true,
        discount_percent: coupon.discount_percent,
    })
}

pub async fn create(pool: &PgPool, request: &CreateCouponRequest) -> WebResult<Coupon> {
    Ok(CouponRepository::new(pool).create(request).await?)
}

pub async fn list(pool: &PgPool) -> WebResult<Vec<Coupon>> {
    Ok(CouponRepository::new(pool).list().await?)
}

pub async fn update(pool: &PgPool, id: Uuid, request: &UpdateCouponRequest) -> WebResult<Coupon> {
    Ok(CouponRepository::new(pool).update(id, request).await?)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> WebResult<()> {
    Ok(CouponRepository::new(pool).delete(id).await?)
}
