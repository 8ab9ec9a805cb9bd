use chrono::{DateTime, Datelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Coupon, PriceTable};

/// Fallback applied when a selected category is missing from the price table.
pub const DEFAULT_CATEGORY_PRICE_COP: i64 = 80_000;

/// Time-of-year pricing regime, keyed off the month of the quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PricePhase {
    Preventa,
    Ordinaria,
    Extraordinaria,
}

impl PricePhase {
    /// January is the presale window, March onward is the late window.
    /// February sits in between with no adjustment.
    pub fn for_month(month: u32) -> Self {
        match month {
            1 => PricePhase::Preventa,
            2 => PricePhase::Ordinaria,
            _ => PricePhase::Extraordinaria,
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            PricePhase::Preventa => Decimal::new(85, 2),
            PricePhase::Ordinaria => Decimal::ONE,
            PricePhase::Extraordinaria => Decimal::new(12, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PricePhase::Preventa => "preventa",
            PricePhase::Ordinaria => "ordinaria",
            PricePhase::Extraordinaria => "extraordinaria",
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PriceQuote {
    pub base_price: Decimal,
    pub discount: Decimal,
    pub final_price: Decimal,
    pub phase: PricePhase,
    pub discount_percent: i32,
}

impl PriceQuote {
    pub fn discount_applied(&self) -> bool {
        self.final_price < self.base_price
    }
}

/// Compute the price for a set of selected categories.
///
/// The coupon snapshot is whatever the ledger lookup produced: a code that
/// failed lookup arrives here as `None` and silently contributes no discount.
/// Callers reject empty category lists before invoking this.
pub fn calculate(
    categories: &[String],
    coupon: Option<&Coupon>,
    table: &PriceTable,
    now: DateTime<Utc>,
) -> PriceQuote {
    let mut base_price: Decimal = categories.iter().map(|c| table.price_for(c)).sum();

    let phase = PricePhase::for_month(now.month());
    base_price = quantize(base_price * phase.multiplier());

    let mut discount = Decimal::ZERO;
    let mut discount_percent = 0;
    if let Some(coupon) = coupon.filter(|c| c.active) {
        discount_percent = coupon.discount_percent;
        discount = quantize(base_price * Decimal::from(discount_percent) / Decimal::ONE_HUNDRED);
    }

    PriceQuote {
        base_price,
        discount,
        final_price: base_price - discount,
        phase,
        discount_percent,
    }
}

/// Amounts are kept at two decimal places so what the store persists is
/// exactly what was computed here.
fn quantize(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::TimeZone;
    use uuid::Uuid;

    use super::*;

    fn table() -> PriceTable {
        let mut entries = HashMap::new();
        entries.insert("INFANTIL".to_string(), Decimal::from(100_000));
        entries.insert("Karts".to_string(), Decimal::from(100_000));
        PriceTable::new(entries, Decimal::from(DEFAULT_CATEGORY_PRICE_COP), 1)
    }

    fn coupon(percent: i32, active: bool) -> Coupon {
        Coupon {
            id: Uuid::new_v4(),
            code: "SAVE30".to_string(),
            discount_percent: percent,
            max_uses: None,
            use_count: 0,
            active,
            created_at: Utc::now(),
        }
    }

    fn at_month(month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, month, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn no_coupon_means_final_equals_base() {
        let quote = calculate(&["INFANTIL".to_string()], None, &table(), at_month(2));

        assert_eq!(quote.base_price, Decimal::from(100_000));
        assert_eq!(quote.discount, Decimal::ZERO);
        assert_eq!(quote.final_price, Decimal::from(100_000));
        assert_eq!(quote.phase, PricePhase::Ordinaria);
    }

    #[test]
    fn january_applies_presale_multiplier() {
        let quote = calculate(&["INFANTIL".to_string()], None, &table(), at_month(1));

        assert_eq!(quote.phase, PricePhase::Preventa);
        assert_eq!(quote.base_price, Decimal::from(85_000));
        assert_eq!(quote.final_price, Decimal::from(85_000));
    }

    #[test]
    fn february_boundary_stays_ordinaria() {
        let quote = calculate(&["INFANTIL".to_string()], None, &table(), at_month(2));

        assert_eq!(quote.phase, PricePhase::Ordinaria);
        assert_eq!(quote.base_price, Decimal::from(100_000));
    }

    #[test]
    fn march_onward_applies_late_multiplier() {
        let quote = calculate(&["INFANTIL".to_string()], None, &table(), at_month(3));

        assert_eq!(quote.phase, PricePhase::Extraordinaria);
        assert_eq!(quote.base_price, Decimal::from(120_000));
    }

    #[test]
    fn base_price_sums_selected_categories() {
        let categories = vec!["INFANTIL".to_string(), "Karts".to_string()];
        let quote = calculate(&categories, None, &table(), at_month(2));

        assert_eq!(quote.base_price, Decimal::from(200_000));
    }

    #[test]
    fn missing_category_falls_back_to_default_price() {
        let quote = calculate(&["Inventada".to_string()], None, &table(), at_month(2));

        assert_eq!(quote.base_price, Decimal::from(DEFAULT_CATEGORY_PRICE_COP));
    }

    #[test]
    fn coupon_discount_is_percentage_of_base() {
        let coupon = coupon(30, true);
        let quote = calculate(
            &["INFANTIL".to_string()],
            Some(&coupon),
            &table(),
            at_month(2),
        );

        assert_eq!(quote.discount, Decimal::from(30_000));
        assert_eq!(quote.final_price, Decimal::from(70_000));
        assert_eq!(quote.discount_percent, 30);
        assert!(quote.discount_applied());
    }

    #[test]
    fn inactive_coupon_contributes_nothing() {
        let coupon = coupon(30, false);
        let quote = calculate(
            &["INFANTIL".to_string()],
            Some(&coupon),
            &table(),
            at_month(2),
        );

        assert_eq!(quote.discount, Decimal::ZERO);
        assert_eq!(quote.final_price, quote.base_price);
        assert!(!quote.discount_applied());
    }

    #[test]
    fn full_discount_yields_zero_final_price() {
        let coupon = coupon(100, true);
        let quote = calculate(
            &["INFANTIL".to_string()],
            Some(&coupon),
            &table(),
            at_month(2),
        );

        assert_eq!(quote.final_price, Decimal::ZERO);
    }
}
