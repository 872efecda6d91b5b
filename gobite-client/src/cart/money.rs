//! Money calculation utilities using rust_decimal for precision
//!
//! Line totals are summed exactly as `Decimal`. Subtotal and tax are each
//! rounded to 2 decimal places, half-up (midpoint away from zero), when the
//! totals are calculated; the total is the sum of the two rounded figures.

use rust_decimal::prelude::*;
use shared::models::{CartLine, CartTotals};

/// Rounding precision for monetary values
const DECIMAL_PLACES: u32 = 2;

/// Fixed sales tax rate (10%)
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Round to currency precision, half-up
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Exact Σ price × quantity
pub fn exact_subtotal(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}

/// Subtotal, tax and total for a cart
///
/// Tax is taken on the exact subtotal, then both are rounded. The total is
/// the sum of the two rounded figures so the displayed rows always add up.
pub fn calculate_totals(lines: &[CartLine]) -> CartTotals {
    let exact = exact_subtotal(lines);
    let subtotal = round_money(exact);
    let tax = round_money(exact * TAX_RATE);

    CartTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Format an amount for display, e.g. `$34.07`
pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", round_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::identity::input_to_line;
    use shared::models::{LineConfig, MenuItem};

    fn line(price_cents: i64, quantity: u32) -> CartLine {
        let item = MenuItem::new(
            format!("item-{}", price_cents),
            "Test",
            Decimal::new(price_cents, 2),
            "Test",
        );
        input_to_line(&item, quantity, &LineConfig::default())
    }

    #[test]
    fn test_tax_rate_is_ten_percent() {
        assert_eq!(TAX_RATE, Decimal::new(1, 1));
    }

    #[test]
    fn test_totals_round_half_up() {
        // 12.99 × 1 + 8.99 × 2
        let lines = vec![line(1299, 1), line(899, 2)];

        assert_eq!(exact_subtotal(&lines), Decimal::new(3097, 2));

        let totals = calculate_totals(&lines);
        assert_eq!(totals.subtotal, Decimal::new(3097, 2));
        assert_eq!(totals.tax, Decimal::new(310, 2)); // 3.097 → 3.10
        assert_eq!(totals.total, Decimal::new(3407, 2)); // 34.067 → 34.07
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = calculate_totals(&[]);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_midpoint_rounds_up() {
        assert_eq!(round_money(Decimal::new(1005, 3)), Decimal::new(101, 2));
        assert_eq!(round_money(Decimal::new(1004, 3)), Decimal::new(100, 2));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(3407, 2)), "$34.07");
        assert_eq!(format_money(Decimal::new(5, 0)), "$5.00");
        assert_eq!(format_money(Decimal::new(30965, 3)), "$30.97");
    }
}
