use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::registration::{CreateRegistrationRequest, PriceQuoteRequest},
    error::StorageError,
    models::{Coupon, Registration},
    repository::{
        category::CategoryRepository, coupon::CouponRepository, platform::PlatformRepository,
        registration::RegistrationRepository,
    },
    services::{commission, pricing, pricing::PriceQuote, qr_token},
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

/// Load the coupon snapshot for a pricing run.
///
/// A code that fails lookup is deliberately treated as "no coupon" rather
/// than an error; only the standalone validation endpoint rejects it.
async fn coupon_snapshot(pool: &PgPool, code: Option<&str>) -> WebResult<Option<Coupon>> {
    let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(None);
    };

    match CouponRepository::new(pool).find_active_by_code(code).await {
        Ok(coupon) => Ok(Some(coupon)),
        Err(StorageError::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Price a category selection without creating anything.
pub async fn quote(pool: &PgPool, request: &PriceQuoteRequest) -> WebResult<PriceQuote> {
    let table = CategoryRepository::new(pool).load_price_table().await?;
    let coupon = coupon_snapshot(pool, request.coupon_code.as_deref()).await?;

    Ok(pricing::calculate(
        &request.categories,
        coupon.as_ref(),
        &table,
        Utc::now(),
    ))
}

/// Create a registration: price it, issue its QR, persist it, and when it is
/// born fully paid (zero total) confirm it immediately.
pub async fn create(
    state: &AppState,
    request: &CreateRegistrationRequest,
) -> WebResult<Registration> {
    let pool = state.db.pool();

    let table = CategoryRepository::new(pool).load_price_table().await?;
    let coupon = coupon_snapshot(pool, request.coupon_code.as_deref()).await?;
    let quote = pricing::calculate(&request.categories, coupon.as_ref(), &table, Utc::now());

    let platform = PlatformRepository::new(pool).platform_config().await?;
    let split = commission::split(quote.final_price, &platform);

    let id = Uuid::new_v4();
    let registration = Registration {
        id,
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        national_id: request.national_id.clone(),
        competition_number: request.competition_number.clone(),
        phone: request.phone.clone(),
        email: request.email.clone(),
        categories: request.categories.clone(),
        league: request.league.clone(),
        coupon_code: coupon.as_ref().map(|c| c.code.clone()),
        base_price: quote.base_price,
        discount: quote.discount,
        final_price: quote.final_price,
        commission: split.commission,
        net_to_organizer: split.net_to_organizer,
        payment_status: Registration::initial_status(quote.final_price).to_string(),
        preference_id: None,
        payment_id: None,
        qr_payload: qr_token::issue(&id.to_string(), &state.config.qr_secret),
        check_in: false,
        check_in_time: None,
        created_at: Utc::now(),
    };

    let registration = RegistrationRepository::new(pool).create(&registration).await?;
    tracing::info!(
        registration_id = %registration.id,
        final_price = %registration.final_price,
        status = %registration.payment_status,
        "Registration created"
    );

    // The counter only moves when the coupon actually produced a discount.
    if let Some(coupon) = coupon.filter(|_| quote.discount_applied()) {
        CouponRepository::new(pool).increment_use(&coupon.code).await?;
    }

    if registration.is_completed() {
        send_confirmation_email(state, &registration).await;
    }

    Ok(registration)
}

/// Idempotent `pending -> completed` transition shared by the webhook, the
/// polling verification and the admin override. The confirmation email goes
/// out exactly once, after the state write is durable.
pub async fn complete(
    state: &AppState,
    id: Uuid,
    payment_id: Option<&str>,
) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(state.db.pool());

    match repo.complete(id, payment_id).await? {
        Some(registration) => {
            tracing::info!(registration_id = %id, "Payment confirmed");
            send_confirmation_email(state, &registration).await;
            Ok(registration)
        }
        // Not pending: either already completed (no-op, no resend) or the
        // id is unknown, which the lookup below reports as not found.
        None => Ok(repo.find_by_id(id).await?),
    }
}

async fn send_confirmation_email(state: &AppState, registration: &Registration) {
    let qr_image_url = qr_token::image_url(&registration.qr_payload);
    let html = gateway::templates::registration_confirmation(registration, &qr_image_url);
    let subject = format!(
        "Inscripción confirmada - {} {}",
        registration.first_name, registration.last_name
    );
    let cc = Some(state.config.admin_email.as_str()).filter(|a| !a.is_empty());

    if !state
        .mailer
        .send(&registration.email, &subject, &html, cc)
        .await
    {
        tracing::error!(
            registration_id = %registration.id,
            "Confirmation email dispatch failed"
        );
    }
}

pub async fn get(pool: &PgPool, id: Uuid) -> WebResult<Registration> {
    Ok(RegistrationRepository::new(pool).find_by_id(id).await?)
}

pub async fn list(pool: &PgPool) -> WebResult<Vec<Registration>> {
    Ok(RegistrationRepository::new(pool).list().await?)
}

pub async fn bulk_delete(pool: &PgPool, ids: &[Uuid]) -> WebResult<u64> {
    let deleted = RegistrationRepository::new(pool).delete_many(ids).await?;
    tracing::info!(deleted, "Registrations bulk-deleted");
    Ok(deleted)
}

/// Admin override for stuck payments; reuses the idempotent completion path.
pub async fn override_status(state: &AppState, id: Uuid, status: &str) -> WebResult<Registration> {
    if status != storage::models::payment_status::COMPLETED {
        return Err(WebError::BadRequest(
            "Only the completed status can be set manually".to_string(),
        ));
    }

    complete(state, id, None).await
}
