use rust_decimal::{Decimal, RoundingStrategy};

/// Stand-in growth factor; this is not a forecasting model.
pub const PLACEHOLDER_MULTIPLIER: Decimal = Decimal::from_parts(105, 0, 0, false, 2);

/// `None` when the result does not fit in a `Decimal`.
pub fn project_capital(initial: Decimal) -> Option<Decimal> {
    initial.checked_mul(PLACEHOLDER_MULTIPLIER)
}

/// `$1,234.56`: two decimals (banker's rounding) with comma grouping.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${sign}{grouped}.{frac}")
}
