//! Number formatting for chart labels and tooltips

/// Default precision of [`format_currency`]
pub const CURRENCY_DECIMALS: u8 = 0;
/// Default precision of [`format_percent`]
pub const PERCENT_DECIMALS: u8 = 1;
/// Default precision of [`format_number`]
pub const NUMBER_DECIMALS: u8 = 0;

/// Fixed-point rendering, rounding half away from zero
///
/// `format!("{:.0}", 2.5)` gives "2"; chart labels expect "3".
fn to_fixed(value: f64, decimals: u8) -> String {
    let factor = 10f64.powi(decimals as i32);
    // + 0.0 turns -0.0 into 0.0
    let rounded = (value * factor).round() / factor + 0.0;
    format!("{:.*}", decimals as usize, rounded)
}

/// Formats a money amount with a K/M/B suffix
///
/// The suffix is picked from the unscaled value (>= 1e9 B, >= 1e6 M,
/// >= 1e3 K), then the scaled value is rounded, so `999_999.0` becomes
/// "$1000K". Negative amounts are never scaled.
///
/// # Examples
///
/// ```
/// use movie_insights_frontend::shared::number_format::format_currency;
///
/// assert_eq!(format_currency(2_500_000_000.0, 0), "$3B");
/// assert_eq!(format_currency(1_234_567.0, 2), "$1.23M");
/// ```
pub fn format_currency(value: f64, decimals: u8) -> String {
    if value >= 1e9 {
        format!("${}B", to_fixed(value / 1e9, decimals))
    } else if value >= 1e6 {
        format!("${}M", to_fixed(value / 1e6, decimals))
    } else if value >= 1e3 {
        format!("${}K", to_fixed(value / 1e3, decimals))
    } else {
        format!("${}", to_fixed(value, decimals))
    }
}

/// Formats a value that is already a percentage
///
/// ```
/// use movie_insights_frontend::shared::number_format::format_percent;
///
/// assert_eq!(format_percent(12.345, 1), "12.3%");
/// ```
pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{}%", to_fixed(value, decimals))
}

/// Formats a number with comma thousands separators (en-US style)
///
/// ```
/// use movie_insights_frontend::shared::number_format::format_number;
///
/// assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
/// ```
pub fn format_number(value: f64, decimals: u8) -> String {
    let formatted = to_fixed(value, decimals);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_thresholds() {
        assert_eq!(format_currency(999.0, 0), "$999");
        assert_eq!(format_currency(1_000.0, 0), "$1K");
        assert_eq!(format_currency(999_999.0, 0), "$1000K");
        assert_eq!(format_currency(1_000_000.0, 0), "$1M");
        assert_eq!(format_currency(999_999_999.0, 0), "$1000M");
        assert_eq!(format_currency(1_000_000_000.0, 0), "$1B");
    }

    #[test]
    fn test_currency_rounds_half_up() {
        assert_eq!(format_currency(2_500_000_000.0, CURRENCY_DECIMALS), "$3B");
        assert_eq!(format_currency(1_500.0, 0), "$2K");
        assert_eq!(format_currency(1_499.0, 0), "$1K");
        assert_eq!(format_currency(2.5, 0), "$3");
        assert_eq!(format_currency(999.5, 0), "$1000");
    }

    #[test]
    fn test_currency_decimals() {
        assert_eq!(format_currency(1_234.0, 1), "$1.2K");
        assert_eq!(format_currency(237_000_000.0, 1), "$237.0M");
        assert_eq!(format_currency(2_787_965_087.0, 2), "$2.79B");
        assert_eq!(format_currency(0.0, 2), "$0.00");
    }

    #[test]
    fn test_currency_negative_is_not_scaled() {
        assert_eq!(format_currency(-5_000.0, 0), "$-5000");
        assert_eq!(format_currency(-0.4, 0), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.345, 1), "12.3%");
        assert_eq!(format_percent(75.25, PERCENT_DECIMALS), "75.3%");
        assert_eq!(format_percent(-99.94, 1), "-99.9%");
        assert_eq!(format_percent(100.0, 0), "100%");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.0, NUMBER_DECIMALS), "1,234,567");
        assert_eq!(format_number(1234.567, 1), "1,234.6");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(0.0, 2), "0.00");
        assert_eq!(format_number(-1234567.5, 0), "-1,234,568");
        assert_eq!(format_number(123456.0, 0), "123,456");
    }
}
