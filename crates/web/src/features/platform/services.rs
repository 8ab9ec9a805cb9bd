use sqlx::PgPool;
use storage::{
    dto::platform::{
        CommissionStatsResponse, UpdateEventPaymentConfigRequest, UpdatePlatformConfigRequest,
    },
    models::{EventPaymentConfig, PlatformConfig},
    repository::{platform::PlatformRepository, registration::RegistrationRepository},
};

use crate::error::WebResult;

pub async fn platform_config(pool: &PgPool) -> WebResult<PlatformConfig> {
    Ok(PlatformRepository::new(pool).platform_config().await?)
}

pub async fn update_platform_config(
    pool: &PgPool,
    request: &UpdatePlatformConfigRequest,
) -> WebResult<PlatformConfig> {
    let config = PlatformRepository::new(pool)
        .update_platform_config(request)
        .await?;

    tracing::info!(
        commission_type = %config.commission_type,
        commission_value = %config.commission_value,
        "Platform commission configuration updated"
    );

    Ok(config)
}

pub async fn event_payment_config(pool: &PgPool) -> WebResult<EventPaymentConfig> {
    Ok(PlatformRepository::new(pool).event_payment_config().await?)
}

pub async fn update_event_payment_config(
    pool: &PgPool,
    request: &UpdateEventPaymentConfigRequest,
) -> WebResult<EventPaymentConfig> {
    Ok(PlatformRepository::new(pool)
        .update_event_payment_config(request)
        .await?)
}

/// Commission totals over completed registrations plus the current config,
/// for the operator dashboard.
pub async fn commission_stats(pool: &PgPool) -> WebResult<CommissionStatsResponse> {
    let config = PlatformRepository::new(pool).platform_config().await?;
    let totals = RegistrationRepository::new(pool).commission_totals().await?;

    Ok(CommissionStatsResponse {
        commission_type: config.commission_type,
        commission_value: config.commission_value,
        total_commission: totals.total_commission,
        total_net_to_organizer: totals.total_net,
        total_collected: totals.total_collected,
        completed_count: totals.completed_count,
    })
}
