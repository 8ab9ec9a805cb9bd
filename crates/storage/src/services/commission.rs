use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{PlatformConfig, commission_mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionSplit {
    pub commission: Decimal,
    pub net_to_organizer: Decimal,
}

/// Split a completed payment between the platform and the event organizer.
///
/// The commission is rounded to the whole currency unit (half away from
/// zero) and clamped so it never exceeds the payment; the net side is
/// derived by subtraction so the two always sum back to the final price.
pub fn split(final_price: Decimal, config: &PlatformConfig) -> CommissionSplit {
    let raw = if config.commission_type == commission_mode::FIXED {
        config.commission_value
    } else {
        final_price * config.commission_value / Decimal::ONE_HUNDRED
    };

    let commission = raw
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .min(final_price);

    CommissionSplit {
        commission,
        net_to_organizer: final_price - commission,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn config(mode: &str, value: i64) -> PlatformConfig {
        PlatformConfig {
            commission_type: mode.to_string(),
            commission_value: Decimal::from(value),
            mp_access_token: None,
            mp_public_key: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn percentage_commission_splits_the_payment() {
        let split = split(
            Decimal::from(100_000),
            &config(commission_mode::PERCENTAGE, 5),
        );

        assert_eq!(split.commission, Decimal::from(5_000));
        assert_eq!(split.net_to_organizer, Decimal::from(95_000));
    }

    #[test]
    fn fixed_commission_ignores_the_amount() {
        let split = split(Decimal::from(120_000), &config(commission_mode::FIXED, 10_000));

        assert_eq!(split.commission, Decimal::from(10_000));
        assert_eq!(split.net_to_organizer, Decimal::from(110_000));
    }

    #[test]
    fn commission_never_exceeds_the_payment() {
        let split = split(Decimal::from(8_000), &config(commission_mode::FIXED, 10_000));

        assert_eq!(split.commission, Decimal::from(8_000));
        assert_eq!(split.net_to_organizer, Decimal::ZERO);
    }

    #[test]
    fn zero_payment_splits_to_zero() {
        let split = split(Decimal::ZERO, &config(commission_mode::PERCENTAGE, 5));

        assert_eq!(split.commission, Decimal::ZERO);
        assert_eq!(split.net_to_organizer, Decimal::ZERO);
    }

    #[test]
    fn commission_rounds_half_up_to_whole_units() {
        // 5% of 12,350 = 617.5, which rounds away from zero to 618.
        let split = split(Decimal::from(12_350), &config(commission_mode::PERCENTAGE, 5));

        assert_eq!(split.commission, Decimal::from(618));
        assert_eq!(split.net_to_organizer, Decimal::from(11_732));
    }

    #[test]
    fn split_always_sums_back_to_the_payment() {
        for amount in [0i64, 1, 999, 12_345, 100_000, 1_234_567] {
            let final_price = Decimal::from(amount);
            for cfg in [
                config(commission_mode::PERCENTAGE, 7),
                config(commission_mode::FIXED, 4_500),
            ] {
                let split = split(final_price, &cfg);
                assert_eq!(split.commission + split.net_to_organizer, final_price);
                assert!(split.commission <= final_price);
            }
        }
    }
}
