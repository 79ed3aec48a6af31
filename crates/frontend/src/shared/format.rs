/// Formats an integer with dot thousand separators
///
/// # Examples
/// ```
/// use frontend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats a rupiah amount: "Rp 1.234.567" (whole) or "Rp 1.234.567,50".
pub fn format_rupiah(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let sign = if negative { "-" } else { "" };
    if fraction == 0 {
        format!("{}Rp {}", sign, format_number(whole))
    } else {
        format!("{}Rp {},{:02}", sign, format_number(whole), fraction)
    }
}

/// Formats a measurement with up to three decimals, trailing zeros trimmed.
pub fn format_measure(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(1_600_000.0), "Rp 1.600.000");
        assert_eq!(format_rupiah(1234567.5), "Rp 1.234.567,50");
        assert_eq!(format_rupiah(-425_000.0), "-Rp 425.000");
    }

    #[test]
    fn test_format_measure() {
        assert_eq!(format_measure(0.0), "0");
        assert_eq!(format_measure(19.1), "19.1");
        assert_eq!(format_measure(0.0004), "0");
        assert_eq!(format_measure(-0.7), "-0.7");
        assert_eq!(format_measure(3.125), "3.125");
    }
}
