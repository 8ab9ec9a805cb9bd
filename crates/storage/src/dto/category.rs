use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::CategoryPriceEntry;

/// Public view of the category catalog: ordered names, the price map, and
/// the display grouping, stamped with the catalog version.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryCatalogResponse {
    pub categories: Vec<String>,
    pub prices: HashMap<String, Decimal>,
    pub groups: BTreeMap<String, Vec<String>>,
    pub version: i32,
}

impl CategoryCatalogResponse {
    /// Entries arrive ordered by display position.
    pub fn from_entries(entries: Vec<CategoryPriceEntry>, version: i32) -> Self {
        let mut categories = Vec::with_capacity(entries.len());
        let mut prices = HashMap::with_capacity(entries.len());
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for entry in entries {
            categories.push(entry.name.clone());
            prices.insert(entry.name.clone(), entry.price);
            if let Some(group) = entry.group_name {
                groups.entry(group).or_default().push(entry.name);
            }
        }

        Self {
            categories,
            prices,
            groups,
            version,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PriceEntryUpdate {
    #[validate(length(min = 1, max = 255, message = "Category name is required"))]
    pub name: String,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    #[validate(length(max = 255))]
    pub group_name: Option<String>,

    #[serde(default)]
    pub position: i32,
}

/// Admin write to the price table. `replace` swaps the whole document;
/// otherwise entries are merged into the existing mapping.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePricesRequest {
    #[validate(nested)]
    #[validate(length(min = 1, message = "At least one entry is required"))]
    pub entries: Vec<PriceEntryUpdate>,

    #[serde(default)]
    pub replace: bool,
}

fn validate_price(price: &Decimal) -> Result<(), validator::ValidationError> {
    if price.is_sign_negative() {
        return Err(validator::ValidationError::new("negative_price"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_groups_preserve_entry_order() {
        let entries = vec![
            CategoryPriceEntry {
                name: "115cc Elite".to_string(),
                price: Decimal::from(100_000),
                group_name: Some("VELOCIDAD TOP".to_string()),
                position: 1,
            },
            CategoryPriceEntry {
                name: "SuperMoto".to_string(),
                price: Decimal::from(100_000),
                group_name: Some("VELOCIDAD TOP".to_string()),
                position: 2,
            },
        ];

        let catalog = CategoryCatalogResponse::from_entries(entries, 3);

        assert_eq!(catalog.categories, vec!["115cc Elite", "SuperMoto"]);
        assert_eq!(
            catalog.groups["VELOCIDAD TOP"],
            vec!["115cc Elite", "SuperMoto"]
        );
        assert_eq!(catalog.version, 3);
    }

    #[test]
    fn negative_prices_are_rejected() {
        let entry = PriceEntryUpdate {
            name: "Karts".to_string(),
            price: Decimal::from(-1),
            group_name: None,
            position: 0,
        };

        assert!(entry.validate().is_err());
    }
}
