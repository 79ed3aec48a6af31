use chrono::NaiveDate;

/// Field-keyed validation messages, in insertion order so the form can
/// show them next to the fields in a stable sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.push((field.into(), message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// First message recorded for the field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Validation contract for editor drafts.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

pub fn require_text(errors: &mut FieldErrors, field: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{} wajib diisi", label));
    }
}

/// Parse a decimal form input; records an error when missing or invalid.
pub fn require_amount(errors: &mut FieldErrors, field: &str, value: &str, label: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, format!("{} wajib diisi", label));
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v > 0.0 => v,
        Ok(_) => {
            errors.push(field, format!("{} harus lebih dari 0", label));
            0.0
        }
        Err(_) => {
            errors.push(field, format!("{} bukan angka yang valid", label));
            0.0
        }
    }
}

/// Parse a `YYYY-MM-DD` form input; records an error when missing or invalid.
pub fn require_date(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    label: &str,
) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, format!("{} wajib diisi", label));
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            errors.push(field, format!("{} bukan tanggal yang valid", label));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_keep_insertion_order() {
        let mut errors = FieldErrors::new();
        errors.push("payee", "Penerima wajib diisi");
        errors.push("amount", "Jumlah wajib diisi");
        let fields: Vec<&str> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["payee", "amount"]);
        assert_eq!(errors.get("amount"), Some("Jumlah wajib diisi"));
        assert_eq!(errors.get("missing"), None);
    }

    #[test]
    fn test_require_text() {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "payee", "  ", "Penerima");
        require_text(&mut errors, "dept", "Keuangan", "Departemen");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("payee"), Some("Penerima wajib diisi"));
    }

    #[test]
    fn test_require_amount() {
        let mut errors = FieldErrors::new();
        assert_eq!(require_amount(&mut errors, "a", "1500000.50", "Jumlah"), 1500000.50);
        assert!(errors.is_empty());

        require_amount(&mut errors, "b", "", "Jumlah");
        require_amount(&mut errors, "c", "-3", "Jumlah");
        require_amount(&mut errors, "d", "abc", "Jumlah");
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("c"), Some("Jumlah harus lebih dari 0"));
    }

    #[test]
    fn test_require_date() {
        let mut errors = FieldErrors::new();
        let parsed = require_date(&mut errors, "voucher_date", "2026-07-31", "Tanggal");
        assert_eq!(parsed, Some(NaiveDate::from_ymd_opt(2026, 7, 31).unwrap()));

        assert_eq!(require_date(&mut errors, "x", "31-07-2026", "Tanggal"), None);
        assert_eq!(errors.get("x"), Some("Tanggal bukan tanggal yang valid"));
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());
        let mut errors = FieldErrors::new();
        errors.push("f", "m");
        assert!(errors.into_result().is_err());
    }
}
