use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Coupon {
    pub id: Uuid,
    /// Stored uppercase; lookups normalize before matching.
    pub code: String,
    pub discount_percent: i32,
    pub max_uses: Option<i32>,
    pub use_count: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Coupon {
    pub fn is_exhausted(&self) -> bool {
        self.max_uses.is_some_and(|max| self.use_count >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(max_uses: Option<i32>, use_count: i32) -> Coupon {
        Coupon {
            id: Uuid::new_v4(),
            code: "SAVE30".to_string(),
            discount_percent: 30,
            max_uses,
            use_count,
            active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn uncapped_coupon_never_exhausts() {
        assert!(!coupon(None, 1_000).is_exhausted());
    }

    #[test]
    fn capped_coupon_exhausts_at_limit() {
        assert!(!coupon(Some(10), 9).is_exhausted());
        assert!(coupon(Some(10), 10).is_exhausted());
    }
}
