//! Presentation formatting for estimator values.
//!
//! Currency tiers are divided and rounded as `f64`, so a scaled amount that
//! has no exact binary form rounds by its stored value: 3.15 million is
//! stored as 3.1499... and renders as `"$3.1M"`. Exact halves round away
//! from zero, so `1500` renders as `"$2K"`. Counts, inputs and shares round
//! their exact decimal value.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::InputField;

const MILLION: Decimal = dec!(1000000);
const THOUSAND: Decimal = dec!(1000);

/// Formats a USD amount compactly.
///
/// - at least one million: `"$X.XM"` (one decimal)
/// - at least one thousand: `"$XK"` (rounded to a whole number)
/// - otherwise: `"$X"` (rounded to a whole number)
///
/// # Example
///
/// ```rust
/// use roi_core::format::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(999)), "$999");
/// assert_eq!(format_currency(dec!(1500)), "$2K");
/// assert_eq!(format_currency(dec!(2500000)), "$2.5M");
/// assert_eq!(format_currency(dec!(3150000)), "$3.1M");
/// ```
pub fn format_currency(value: Decimal) -> String {
    if value >= MILLION {
        format!("${}M", binary_fixed(value, MILLION, 1))
    } else if value >= THOUSAND {
        format!("${}K", binary_fixed(value, THOUSAND, 0))
    } else {
        format!("${}", binary_fixed(value, Decimal::ONE, 0))
    }
}

/// Formats a count with thousands separators and at most three decimals.
///
/// ```rust
/// use roi_core::format::format_count;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_count(dec!(150000)), "150,000");
/// assert_eq!(format_count(dec!(1234.56789)), "1,234.568");
/// ```
pub fn format_count(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats an input value the way its control displays it.
///
/// ```rust
/// use roi_core::format::format_input;
/// use roi_core::InputField;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_input(InputField::PortfolioSize, dec!(150000)), "150,000");
/// assert_eq!(format_input(InputField::CallsPerLoan, dec!(3)), "3.0");
/// assert_eq!(format_input(InputField::CostPerCall, dec!(12)), "$12");
/// assert_eq!(format_input(InputField::DelinquencyRate, dec!(4.5)), "4.5%");
/// ```
pub fn format_input(field: InputField, value: Decimal) -> String {
    match field {
        InputField::PortfolioSize => format_count(value),
        InputField::CallsPerLoan => fixed(value, 1).to_string(),
        InputField::CostPerCall => format!("${}", value.normalize()),
        InputField::DelinquencyRate => format!("{}%", value.normalize()),
    }
}

/// Formats a percentage share with one decimal, e.g. `"88.7%"`.
pub fn format_share(percent: Decimal) -> String {
    format!("{}%", fixed(percent, 1))
}

/// Divides `value` by `unit` in `f64` and rounds the exact binary quotient to
/// `dp` places. Falls back to the decimal quotient outside the `f64` range.
fn binary_fixed(value: Decimal, unit: Decimal, dp: u32) -> Decimal {
    let quotient = value
        .to_f64()
        .zip(unit.to_f64())
        .and_then(|(v, u)| Decimal::from_f64_retain(v / u));
    fixed(quotient.unwrap_or(value / unit), dp)
}

/// Rounds to exactly `dp` decimal places, keeping trailing zeros.
fn fixed(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_tiers() {
        assert_eq!(format_currency(dec!(0)), "$0");
        assert_eq!(format_currency(dec!(999)), "$999");
        assert_eq!(format_currency(dec!(999.4)), "$999");
        assert_eq!(format_currency(dec!(1000)), "$1K");
        assert_eq!(format_currency(dec!(1500)), "$2K");
        assert_eq!(format_currency(dec!(2500)), "$3K");
        assert_eq!(format_currency(dec!(403200)), "$403K");
        assert_eq!(format_currency(dec!(1000000)), "$1.0M");
        assert_eq!(format_currency(dec!(2500000)), "$2.5M");
        assert_eq!(format_currency(dec!(3553200)), "$3.6M");
        assert_eq!(format_currency(dec!(4500000)), "$4.5M");
    }

    #[test]
    fn test_format_currency_rounds_stored_binary_value() {
        // 3.15 and 1.15 sit just below the half, 1.35 just above it.
        assert_eq!(format_currency(dec!(3150000)), "$3.1M");
        assert_eq!(format_currency(dec!(1150000)), "$1.1M");
        assert_eq!(format_currency(dec!(1350000)), "$1.4M");
        assert_eq!(format_currency(dec!(1350000.000)), "$1.4M");
        assert_eq!(format_currency(dec!(243600000)), "$243.6M");
    }

    #[test]
    fn test_format_currency_tier_edges_round_within_tier() {
        // Rounding happens after the tier is chosen.
        assert_eq!(format_currency(dec!(999.5)), "$1000");
        assert_eq!(format_currency(dec!(999999)), "$1000K");
    }

    #[test]
    fn test_format_currency_negative_uses_plain_tier() {
        assert_eq!(format_currency(dec!(-1500)), "$-1500");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(dec!(0)), "0");
        assert_eq!(format_count(dec!(999)), "999");
        assert_eq!(format_count(dec!(1000)), "1,000");
        assert_eq!(format_count(dec!(423000)), "423,000");
        assert_eq!(format_count(dec!(2000000)), "2,000,000");
        assert_eq!(format_count(dec!(6000.00)), "6,000");
        assert_eq!(format_count(dec!(-12345.5)), "-12,345.5");
    }

    #[test]
    fn test_format_input_one_decimal_rate() {
        assert_eq!(format_input(InputField::CallsPerLoan, dec!(2.5)), "2.5");
        assert_eq!(format_input(InputField::CallsPerLoan, dec!(0.5)), "0.5");
        assert_eq!(format_input(InputField::DelinquencyRate, dec!(4.0)), "4%");
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(dec!(88.65248)), "88.7%");
        assert_eq!(format_share(dec!(0)), "0.0%");
        assert_eq!(format_share(dec!(100)), "100.0%");
    }
}
