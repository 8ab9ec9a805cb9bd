use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::category::PriceEntryUpdate;
use crate::error::{Result, StorageError};
use crate::models::{CatalogMeta, CategoryPriceEntry, PriceTable};
use crate::services::pricing::DEFAULT_CATEGORY_PRICE_COP;

/// Repository for the category catalog and its price table
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_entries(&self) -> Result<Vec<CategoryPriceEntry>> {
        let entries = sqlx::query_as::<_, CategoryPriceEntry>(
            "SELECT * FROM category_prices ORDER BY position, name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn meta(&self) -> Result<CatalogMeta> {
        let meta = sqlx::query_as::<_, CatalogMeta>("SELECT version, updated_at FROM catalog_meta")
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(meta)
    }

    /// Load the whole mapping as one immutable snapshot for a pricing run.
    pub async fn load_price_table(&self) -> Result<PriceTable> {
        let entries = self.list_entries().await?;
        let meta = self.meta().await?;

        let mapping: HashMap<String, Decimal> = entries
            .into_iter()
            .map(|entry| (entry.name, entry.price))
            .collect();

        Ok(PriceTable::new(
            mapping,
            Decimal::from(DEFAULT_CATEGORY_PRICE_COP),
            meta.version,
        ))
    }

    /// Admin write: either replace the whole document or merge entries into
    /// it. Runs in one transaction and bumps the catalog version.
    pub async fn update_entries(
        &self,
        entries: &[PriceEntryUpdate],
        replace: bool,
    ) -> Result<CatalogMeta> {
        let mut tx = self.pool.begin().await?;

        if replace {
            sqlx::query("DELETE FROM category_prices")
                .execute(&mut *tx)
                .await?;
        }

        for entry in entries {
            sqlx::query(
                r#"
                INSERT INTO category_prices (name, price, group_name, position)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (name) DO UPDATE
                SET price = EXCLUDED.price,
                    group_name = EXCLUDED.group_name,
                    position = EXCLUDED.position
                "#,
            )
            .bind(&entry.name)
            .bind(entry.price)
            .bind(&entry.group_name)
            .bind(entry.position)
            .execute(&mut *tx)
            .await?;
        }

        let meta = sqlx::query_as::<_, CatalogMeta>(
            r#"
            UPDATE catalog_meta
            SET version = version + 1,
                updated_at = now()
            RETURNING version, updated_at
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(meta)
    }
}
