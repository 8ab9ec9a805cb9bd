use sqlx::PgPool;
use storage::{dto::news::CreateNewsRequest, models::News, repository::news::NewsRepository};
use uuid::Uuid;

use crate::error::WebResult;

/// List published news, newest first
pub async fn list(pool: &PgPool) -> WebResult<Vec<News>> {
    Ok(NewsRepository::new(pool).list().await?)
}

/// Publish a news article
pub async fn create(pool: &PgPool, request: &CreateNewsRequest) -> WebResult<News> {
    Ok(NewsRepository::new(pool).create(request).await?)
}

/// Delete a news article
pub async fn delete(pool: &PgPool, id: Uuid) -> WebResult<()> {
    Ok(NewsRepository::new(pool).delete(id).await?)
}
