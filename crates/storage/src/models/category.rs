use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CategoryPriceEntry {
    pub name: String,
    pub price: Decimal,
    pub group_name: Option<String>,
    pub position: i32,
}

/// Singleton row versioning the category catalog; bumped on every admin write.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CatalogMeta {
    pub version: i32,
    pub updated_at: DateTime<Utc>,
}

/// Immutable snapshot of the price table, loaded once per pricing computation.
#[derive(Debug, Clone)]
pub struct PriceTable {
    entries: HashMap<String, Decimal>,
    default_price: Decimal,
    version: i32,
}

impl PriceTable {
    pub fn new(entries: HashMap<String, Decimal>, default_price: Decimal, version: i32) -> Self {
        Self {
            entries,
            default_price,
            version,
        }
    }

    /// Categories missing from the table fall back to the default price.
    pub fn price_for(&self, category: &str) -> Decimal {
        self.entries
            .get(category)
            .copied()
            .unwrap_or(self.default_price)
    }

    pub fn version(&self) -> i32 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_uses_default_price() {
        let mut entries = HashMap::new();
        entries.insert("INFANTIL".to_string(), Decimal::from(50_000));
        let table = PriceTable::new(entries, Decimal::from(80_000), 1);

        assert_eq!(table.price_for("INFANTIL"), Decimal::from(50_000));
        assert_eq!(table.price_for("NO SUCH CATEGORY"), Decimal::from(80_000));
    }
}
