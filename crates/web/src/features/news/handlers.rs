use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::news::{CreateNewsRequest, NewsListResponse, NewsResponse};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/news",
    responses(
        (status = 200, description = "Published news, newest first", body = NewsListResponse)
    ),
    tag = "news"
)]
pub async fn list_news(State(state): State<AppState>) -> Result<Response, WebError> {
    let news = services::list(state.db.pool()).await?;

    Ok(Json(NewsListResponse {
        news: news.into_iter().map(NewsResponse::from).collect(),
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/news",
    request_body = CreateNewsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "News article published", body = NewsResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "news"
)]
pub async fn create_news(
    State(state): State<AppState>,
    Json(req): Json<CreateNewsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let news = services::create(state.db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(NewsResponse::from(news))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/news/{id}",
    params(
        ("id" = Uuid, Path, description = "News article id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "News article deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "News article not found")
    ),
    tag = "news"
)]
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
