use sqlx::PgPool;

use crate::dto::platform::{UpdateEventPaymentConfigRequest, UpdatePlatformConfigRequest};
use crate::error::{Result, StorageError};
use crate::models::{EventPaymentConfig, PlatformConfig};

/// Repository for the platform and event payment configuration singletons
pub struct PlatformRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlatformRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn platform_config(&self) -> Result<PlatformConfig> {
        let config = sqlx::query_as::<_, PlatformConfig>(
            r#"
            SELECT commission_type, commission_value, mp_access_token, mp_public_key, updated_at
            FROM platform_config
            "#,
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(config)
    }

    pub async fn update_platform_config(
        &self,
        req: &UpdatePlatformConfigRequest,
    ) -> Result<PlatformConfig> {
        let config = sqlx::query_as::<_, PlatformConfig>(
            r#"
            UPDATE platform_config
            SET commission_type = $1,
                commission_value = $2,
                mp_access_token = COALESCE($3, mp_access_token),
                mp_public_key = COALESCE($4, mp_public_key),
                updated_at = now()
            RETURNING commission_type, commission_value, mp_access_token, mp_public_key, updated_at
            "#,
        )
        .bind(&req.commission_type)
        .bind(req.commission_value)
        .bind(&req.mp_access_token)
        .bind(&req.mp_public_key)
        .fetch_one(self.pool)
        .await?;

        Ok(config)
    }

    pub async fn event_payment_config(&self) -> Result<EventPaymentConfig> {
        let config = sqlx::query_as::<_, EventPaymentConfig>(
            "SELECT mp_access_token, mp_public_key, updated_at FROM event_payment_config",
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(config)
    }

    pub async fn update_event_payment_config(
        &self,
        req: &UpdateEventPaymentConfigRequest,
    ) -> Result<EventPaymentConfig> {
        let config = sqlx::query_as::<_, EventPaymentConfig>(
            r#"
            UPDATE event_payment_config
            SET mp_access_token = COALESCE($1, mp_access_token),
                mp_public_key = COALESCE($2, mp_public_key),
                updated_at = now()
            RETURNING mp_access_token, mp_public_key, updated_at
            "#,
        )
        .bind(&req.mp_access_token)
        .bind(&req.mp_public_key)
        .fetch_one(self.pool)
        .await?;

        Ok(config)
    }
}
