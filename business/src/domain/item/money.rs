pub const CURRENCY_SYMBOL: &str = "$";
pub const CURRENCY_CODE: &str = "USD";

/// Formats an amount as US dollars with exactly two decimals and the
/// currency code appended, e.g. `1234.5` -> `$1,234.50USD`.
///
/// Cents are rounded half away from zero. An amount that rounds to zero is
/// rendered without a sign.
pub fn format_money(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{CURRENCY_SYMBOL}NaN{CURRENCY_CODE}");
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}{CURRENCY_SYMBOL}∞{CURRENCY_CODE}");
    }

    let cents = (amount * 100.0).round();
    let sign = if cents < 0.0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100.0).trunc();
    let fraction = cents - whole * 100.0;

    format!(
        "{sign}{CURRENCY_SYMBOL}{}.{:02}{CURRENCY_CODE}",
        group_thousands(&format!("{whole:.0}")),
        fraction as u8
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_round_to_two_decimals_and_append_code() {
        assert_eq!(format_money(9.999), "$10.00USD");
        assert_eq!(format_money(29.997), "$30.00USD");
        assert_eq!(format_money(2.5), "$2.50USD");
        assert_eq!(format_money(0.0), "$0.00USD");
    }

    #[test]
    fn should_round_half_away_from_zero() {
        assert_eq!(format_money(0.125), "$0.13USD");
        assert_eq!(format_money(-0.125), "-$0.13USD");
    }

    #[test]
    fn should_group_thousands() {
        assert_eq!(format_money(1_234.5), "$1,234.50USD");
        assert_eq!(format_money(1_234_567.891), "$1,234,567.89USD");
        assert_eq!(format_money(999.999), "$1,000.00USD");
        assert_eq!(format_money(100_000.0), "$100,000.00USD");
    }

    #[test]
    fn should_prefix_negative_amounts_with_minus() {
        assert_eq!(format_money(-1_234.5), "-$1,234.50USD");
    }

    #[test]
    fn should_not_render_negative_zero() {
        assert_eq!(format_money(-0.001), "$0.00USD");
        assert_eq!(format_money(-0.0), "$0.00USD");
    }

    #[test]
    fn should_render_non_finite_amounts() {
        assert_eq!(format_money(f64::NAN), "$NaNUSD");
        assert_eq!(format_money(f64::INFINITY), "$∞USD");
        assert_eq!(format_money(f64::NEG_INFINITY), "-$∞USD");
    }

    proptest! {
        #[test]
        fn should_end_with_code_after_exactly_two_decimals(amount in 0.0f64..1.0e12) {
            let formatted = format_money(amount);
            let body = formatted.strip_suffix(CURRENCY_CODE).unwrap();
            let (_, decimals) = body.rsplit_once('.').unwrap();

            prop_assert!(formatted.starts_with(CURRENCY_SYMBOL));
            prop_assert_eq!(decimals.len(), 2);
            prop_assert!(decimals.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
