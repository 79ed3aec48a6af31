/// Generator for business document codes of the form `PREFIX-YYYY-NNN`.
///
/// The series is always rebuilt from the codes currently present in the
/// store, so the next code stays unique even after deletes and reseeds.
#[derive(Debug, Clone)]
pub struct CodeSeries {
    prefix: &'static str,
    year: i32,
    next: u32,
}

impl CodeSeries {
    pub fn new(prefix: &'static str, year: i32) -> Self {
        Self {
            prefix,
            year,
            next: 1,
        }
    }

    /// Build a series that continues after the highest sequence number
    /// already taken within the same prefix and year.
    pub fn seeded<'a>(
        prefix: &'static str,
        year: i32,
        taken: impl Iterator<Item = &'a str>,
    ) -> Self {
        let highest = taken
            .filter_map(|code| sequence_of(code, prefix, year))
            .max()
            .unwrap_or(0);
        Self {
            prefix,
            year,
            next: highest + 1,
        }
    }

    /// The code the next call to [`CodeSeries::next_code`] will produce.
    pub fn peek(&self) -> String {
        format!("{}-{}-{:03}", self.prefix, self.year, self.next)
    }

    pub fn next_code(&mut self) -> String {
        let code = self.peek();
        self.next += 1;
        code
    }
}

/// Extract the `NNN` part of `PREFIX-YYYY-NNN` when prefix and year match.
fn sequence_of(code: &str, prefix: &str, year: i32) -> Option<u32> {
    let mut parts = code.splitn(3, '-');
    if parts.next()? != prefix {
        return None;
    }
    if parts.next()?.parse::<i32>().ok()? != year {
        return None;
    }
    parts.next()?.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_series_starts_at_one() {
        let mut series = CodeSeries::new("PV", 2026);
        assert_eq!(series.peek(), "PV-2026-001");
        assert_eq!(series.next_code(), "PV-2026-001");
        assert_eq!(series.next_code(), "PV-2026-002");
    }

    #[test]
    fn test_seeded_series_continues_after_highest() {
        let taken = ["PV-2026-001", "PV-2026-007", "PV-2026-003"];
        let series = CodeSeries::seeded("PV", 2026, taken.iter().copied());
        assert_eq!(series.peek(), "PV-2026-008");
    }

    #[test]
    fn test_seeded_series_ignores_other_prefixes_and_years() {
        let taken = ["JRN-2026-050", "PV-2025-099", "PV-2026-002", "garbage"];
        let series = CodeSeries::seeded("PV", 2026, taken.iter().copied());
        assert_eq!(series.peek(), "PV-2026-003");
    }

    #[test]
    fn test_sequence_padding() {
        let mut series = CodeSeries::seeded("TRV", 2026, ["TRV-2026-099"].iter().copied());
        assert_eq!(series.next_code(), "TRV-2026-100");
        assert_eq!(series.next_code(), "TRV-2026-101");
    }
}
