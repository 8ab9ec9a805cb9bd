use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::coupon::{
    CouponListResponse, CouponResponse, CreateCouponRequest, UpdateCouponRequest,
    ValidateCouponRequest, ValidateCouponResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/coupons/validate",
    request_body = ValidateCouponRequest,
    responses(
        (status = 200, description = "Coupon is valid", body = ValidateCouponResponse),
        (status = 400, description = "Coupon has no uses remaining"),
        (status = 404, description = "Coupon unknown or inactive")
    ),
    tag = "coupons"
)]
pub async fn validate_coupon(
    State(state): State<AppState>,
    Json(req): Json<ValidateCouponRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let response = services::validate(state.db.pool(), &req.code).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/coupons",
    request_body = CreateCouponRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Coupon created", body = CouponResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Coupon code already exists")
    ),
    tag = "coupons"
)]
pub async fn create_coupon(
    State(state): State<AppState>,
    Json(req): Json<CreateCouponRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let coupon = services::create(state.db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CouponResponse::from(coupon))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/coupons",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All coupons", body = CouponListResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "coupons"
)]
pub async fn list_coupons(State(state): State<AppState>) -> Result<Response, WebError> {
    let coupons = services::list(state.db.pool()).await?;

    Ok(Json(CouponListResponse {
        coupons: coupons.into_iter().map(CouponResponse::from).collect(),
    })
    .into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/coupons/{id}",
    params(
        ("id" = Uuid, Path, description = "Coupon id")
    ),
    request_body = UpdateCouponRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Coupon updated", body = CouponResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Coupon not found")
    ),
    tag = "coupons"
)]
pub async fn update_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCouponRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let coupon = services::update(state.db.pool(), id, &req).await?;

    Ok(Json(CouponResponse::from(coupon)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/coupons/{id}",
    params(
        ("id" = Uuid, Path, description = "Coupon id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Coupon deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Coupon not found")
    ),
    tag = "coupons"
)]
pub async fn delete_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
