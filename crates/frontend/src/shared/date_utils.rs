/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2026-07-15" or "2026-07-15T14:02:26Z" -> "15/07/2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format a NaiveDate for table cells
pub fn format_naive_date(date: chrono::NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a "YYYY-MM" monitoring period as "MM/YYYY"
pub fn format_period(period: &str) -> String {
    if let Some((year, month)) = period.split_once('-') {
        return format!("{}/{}", month, year);
    }
    period.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-07-15"), "15/07/2026");
        assert_eq!(format_date("2026-07-15T14:02:26.123Z"), "15/07/2026");
    }

    #[test]
    fn test_format_naive_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(format_naive_date(date), "03/08/2026");
    }

    #[test]
    fn test_format_period() {
        assert_eq!(format_period("2026-07"), "07/2026");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_period("invalid"), "invalid");
    }
}
