use rust_decimal::{Decimal, RoundingStrategy};
use tickframe_core::Precision;

/// Round a price to the market's declared precision.
///
/// Decimal-digit precision rounds half away from zero; tick-size precision
/// snaps to the nearest tick. A zero tick reports no usable precision and
/// leaves the price untouched.
pub fn round_price(price: Decimal, precision: &Precision) -> Decimal {
    match precision {
        Precision::DecimalPlaces(dp) => {
            price.round_dp_with_strategy(*dp, RoundingStrategy::MidpointAwayFromZero)
        }
        Precision::TickSize(tick) => {
            if tick.is_zero() {
                return price;
            }
            ((price / tick).round() * tick).normalize()
        }
    }
}

/// Round an amount down to the market's declared precision.
///
/// Amounts truncate toward zero so rounding never submits more than the
/// caller asked for.
pub fn round_amount(amount: Decimal, precision: &Precision) -> Decimal {
    match precision {
        Precision::DecimalPlaces(dp) => {
            amount.round_dp_with_strategy(*dp, RoundingStrategy::ToZero)
        }
        Precision::TickSize(step) => {
            if step.is_zero() {
                return amount;
            }
            ((amount / step).floor() * step).normalize()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_rounds_to_decimal_places() {
        let precision = Precision::DecimalPlaces(2);
        assert_eq!(round_price(dec!(0.12345), &precision), dec!(0.12));
        assert_eq!(round_price(dec!(0.125), &precision), dec!(0.13));
    }

    #[test]
    fn test_price_snaps_to_nearest_tick() {
        let precision = Precision::TickSize(dec!(0.05));
        assert_eq!(round_price(dec!(0.12), &precision), dec!(0.10));
        assert_eq!(round_price(dec!(0.13), &precision), dec!(0.15));
    }

    #[test]
    fn test_amount_truncates_toward_zero() {
        let precision = Precision::DecimalPlaces(3);
        assert_eq!(round_amount(dec!(1.23999), &precision), dec!(1.239));
    }

    #[test]
    fn test_amount_steps_down_to_lot() {
        let precision = Precision::TickSize(dec!(0.5));
        assert_eq!(round_amount(dec!(1.9), &precision), dec!(1.5));
        assert_eq!(round_amount(dec!(2.0), &precision), dec!(2.0));
    }

    #[test]
    fn test_zero_tick_is_a_no_op() {
        assert_eq!(
            round_price(dec!(1.234), &Precision::TickSize(Decimal::ZERO)),
            dec!(1.234)
        );
        assert_eq!(
            round_amount(dec!(1.234), &Precision::TickSize(Decimal::ZERO)),
            dec!(1.234)
        );
    }
}
