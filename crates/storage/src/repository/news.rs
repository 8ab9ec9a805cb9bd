use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::news::CreateNewsRequest;
use crate::error::{Result, StorageError};
use crate::models::News;

/// Repository for news articles
pub struct NewsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NewsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateNewsRequest) -> Result<News> {
        let news = sqlx::query_as::<_, News>(
            r#"
            INSERT INTO news (id, title, content, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.title)
        .bind(&req.content)
        .bind(&req.image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(news)
    }

    pub async fn list(&self) -> Result<Vec<News>> {
        let news = sqlx::query_as::<_, News>(
            "SELECT * FROM news ORDER BY created_at DESC LIMIT 100",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(news)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
