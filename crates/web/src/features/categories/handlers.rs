use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::category::{CategoryCatalogResponse, UpdatePricesRequest};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Category catalog with prices and groups", body = CategoryCatalogResponse)
    ),
    tag = "categories"
)]
pub async fn get_catalog(State(state): State<AppState>) -> Result<Response, WebError> {
    let catalog = services::catalog(state.db.pool()).await?;

    Ok(Json(catalog).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/category-prices",
    request_body = UpdatePricesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Price table updated, returns the new catalog version"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "categories"
)]
pub async fn update_prices(
    State(state): State<AppState>,
    Json(req): Json<UpdatePricesRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let meta = services::update_prices(state.db.pool(), &req).await?;

    Ok(Json(serde_json::json!({
        "version": meta.version,
        "updated_at": meta.updated_at,
    }))
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/category-prices",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Category catalog with prices and groups", body = CategoryCatalogResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "categories"
)]
pub async fn get_catalog_admin(State(state): State<AppState>) -> Result<Response, WebError> {
    let catalog = services::catalog(state.db.pool()).await?;

    Ok(Json(catalog).into_response())
}
