use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::coupon::{CreateCouponRequest, UpdateCouponRequest};
use crate::error::{Result, StorageError};
use crate::models::Coupon;

/// Repository for coupon ledger operations
pub struct CouponRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CouponRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Codes are stored uppercase; the lookup normalizes its input so
    /// matching is case-insensitive.
    pub async fn find_active_by_code(&self, code: &str) -> Result<Coupon> {
        let normalized = code.trim().to_uppercase();
        let coupon = sqlx::query_as::<_, Coupon>(
            "SELECT * FROM coupons WHERE code = $1 AND active = TRUE",
        )
        .bind(normalized)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(coupon)
    }

    pub async fn create(&self, req: &CreateCouponRequest) -> Result<Coupon> {
        let coupon = sqlx::query_as::<_, Coupon>(
            r#"
            INSERT INTO coupons (id, code, discount_percent, max_uses)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(req.code.trim().to_uppercase())
        .bind(req.discount_percent)
        .bind(req.max_uses)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "Coupon code already exists".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(coupon)
    }

    pub async fn list(&self) -> Result<Vec<Coupon>> {
        let coupons =
            sqlx::query_as::<_, Coupon>("SELECT * FROM coupons ORDER BY created_at DESC")
                .fetch_all(self.pool)
                .await?;

        Ok(coupons)
    }

    /// Single atomic increment; the counter only ever moves up.
    pub async fn increment_use(&self, code: &str) -> Result<()> {
        sqlx::query("UPDATE coupons SET use_count = use_count + 1 WHERE code = $1")
            .bind(code.trim().to_uppercase())
            .execute(self.pool)
            .await?;

        Ok(())
    }

    pub async fn update(&self, id: Uuid, req: &UpdateCouponRequest) -> Result<Coupon> {
        let coupon = sqlx::query_as::<_, Coupon>(
            r#"
            UPDATE coupons
            SET active = COALESCE($2, active),
                max_uses = COALESCE($3, max_uses)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.active)
        .bind(req.max_uses)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(coupon)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM coupons WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
