use sqlx::PgPool;
use storage::{
    dto::category::{CategoryCatalogResponse, UpdatePricesRequest},
    models::CatalogMeta,
    repository::category::CategoryRepository,
};

use crate::error::WebResult;

/// Everything a client needs to render the signup form: names, prices,
/// grouping, and the catalog version the snapshot came from.
pub async fn catalog(pool: &PgPool) -> WebResult<CategoryCatalogResponse> {
    let repo = CategoryRepository::new(pool);
    let entries = repo.list_entries().await?;
    let meta = repo.meta().await?;

    Ok(CategoryCatalogResponse::from_entries(entries, meta.version))
}

pub async fn update_prices(pool: &PgPool, request: &UpdatePricesRequest) -> WebResult<CatalogMeta> {
    let meta = CategoryRepository::new(pool)
        .update_entries(&request.entries, request.replace)
        .await?;

    tracing::info!(
        version = meta.version,
        entries = request.entries.len(),
        replace = request.replace,
        "Category price table updated"
    );

    Ok(meta)
}
