//! Per-field filter predicates.
//!
//! A record is visible iff it satisfies the conjunction of all active
//! predicates; an inactive predicate (empty text, no selection, unset
//! date bound) is vacuously true.

use chrono::NaiveDate;

/// Case-insensitive substring match. An empty needle is inactive.
pub fn text_contains(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Exact match against a selected option. An empty selection is inactive.
pub fn matches_choice(value: &str, selected: &str) -> bool {
    selected.is_empty() || value == selected
}

/// Inclusive containment between two optional bounds.
pub fn date_within(value: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if let Some(from) = from {
        if value < from {
            return false;
        }
    }
    if let Some(to) = to {
        if value > to {
            return false;
        }
    }
    true
}

/// Parse a `YYYY-MM-DD` filter input. Empty or unparsable input yields
/// `None`, i.e. an inactive bound.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_text_contains_is_case_insensitive() {
        assert!(text_contains("PT Sumber Rejeki", "rejeki"));
        assert!(text_contains("PT Sumber Rejeki", "SUMBER"));
        assert!(!text_contains("PT Sumber Rejeki", "makmur"));
    }

    #[test]
    fn test_empty_text_filter_is_vacuously_true() {
        assert!(text_contains("anything", ""));
        assert!(text_contains("anything", "   "));
        assert!(text_contains("", ""));
    }

    #[test]
    fn test_matches_choice() {
        assert!(matches_choice("Keuangan", ""));
        assert!(matches_choice("Keuangan", "Keuangan"));
        assert!(!matches_choice("Keuangan", "Produksi"));
    }

    #[test]
    fn test_date_within_inclusive_bounds() {
        let from = Some(d(2026, 7, 1));
        let to = Some(d(2026, 7, 31));
        assert!(date_within(d(2026, 7, 1), from, to));
        assert!(date_within(d(2026, 7, 31), from, to));
        assert!(date_within(d(2026, 7, 15), from, to));
        assert!(!date_within(d(2026, 6, 30), from, to));
        assert!(!date_within(d(2026, 8, 1), from, to));
    }

    #[test]
    fn test_unset_date_bounds_are_vacuously_true() {
        assert!(date_within(d(1990, 1, 1), None, None));
        assert!(date_within(d(2026, 7, 15), Some(d(2026, 7, 1)), None));
        assert!(date_within(d(2026, 7, 15), None, Some(d(2026, 7, 31))));
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("2026-07-15"), Some(d(2026, 7, 15)));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("15/07/2026"), None);
    }

    #[test]
    fn test_relaxing_one_conjunct_never_shrinks_the_result() {
        let rows = [
            ("PV-001", "Keuangan", d(2026, 7, 1)),
            ("PV-002", "Produksi", d(2026, 7, 15)),
            ("PV-003", "Keuangan", d(2026, 8, 2)),
            ("INV-004", "Keuangan", d(2026, 7, 20)),
        ];
        let passes = |search: &str, dept: &str, to: Option<NaiveDate>| {
            rows.iter()
                .filter(|(code, department, date)| {
                    text_contains(code, search)
                        && matches_choice(department, dept)
                        && date_within(*date, None, to)
                })
                .count()
        };

        let strict = passes("pv", "Keuangan", Some(d(2026, 7, 31)));
        assert!(passes("", "Keuangan", Some(d(2026, 7, 31))) >= strict);
        assert!(passes("pv", "", Some(d(2026, 7, 31))) >= strict);
        assert!(passes("pv", "Keuangan", None) >= strict);
    }
}
