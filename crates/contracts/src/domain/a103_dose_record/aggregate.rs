use crate::domain::common::EntityMetadata;
use crate::shared::crud::store::StoreRecord;
use crate::shared::crud::validate::{require_amount, require_text, FieldErrors, Validate};
use serde::{Deserialize, Serialize};

/// Derived exposure status against the regulatory period limit.
///
/// dose ≥ 90% of limit ⇒ Critical, ≥ 70% ⇒ Warning, else Normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoseStatus {
    Normal,
    Warning,
    Critical,
}

impl DoseStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Warning => "Waspada",
            Self::Critical => "Kritis",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "normal" => Some(Self::Normal),
            "warning" => Some(Self::Warning),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// The single derived-status function used by both create and update.
pub fn dose_status(dose_msv: f64, limit_msv: f64) -> DoseStatus {
    if limit_msv <= 0.0 {
        // A missing/zero limit can only be treated as exceeded.
        return DoseStatus::Critical;
    }
    let ratio = dose_msv / limit_msv;
    if ratio >= 0.9 {
        DoseStatus::Critical
    } else if ratio >= 0.7 {
        DoseStatus::Warning
    } else {
        DoseStatus::Normal
    }
}

/// Pemantauan dosis radiasi personel (personnel dose monitoring row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseRecord {
    pub id: i64,
    pub worker_name: String,
    /// TLD badge number, e.g. "TLD-0142".
    pub badge_no: String,
    /// Monitoring period, "YYYY-MM".
    pub period: String,
    pub dose_msv: f64,
    pub limit_msv: f64,
    /// Derived via [`dose_status`], never settable independently.
    pub status: DoseStatus,
    pub metadata: EntityMetadata,
}

impl StoreRecord for DoseRecord {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_label(&self) -> String {
        format!("{} ({})", self.worker_name, self.badge_no)
    }
}

// ============================================================================
// Editor draft
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoseDraft {
    pub worker_name: String,
    pub badge_no: String,
    pub period: String,
    pub dose_msv: String,
    pub limit_msv: String,
}

impl DoseDraft {
    pub fn template(period: &str) -> Self {
        Self {
            period: period.to_string(),
            // Annual whole-body limit for radiation workers.
            limit_msv: "20".to_string(),
            ..Self::default()
        }
    }

    pub fn from_record(record: &DoseRecord) -> Self {
        Self {
            worker_name: record.worker_name.clone(),
            badge_no: record.badge_no.clone(),
            period: record.period.clone(),
            dose_msv: record.dose_msv.to_string(),
            limit_msv: record.limit_msv.to_string(),
        }
    }

    pub fn build(&self, id: i64, existing: Option<&DoseRecord>) -> DoseRecord {
        let dose_msv = self.dose_msv.trim().parse::<f64>().unwrap_or(0.0);
        let limit_msv = self.limit_msv.trim().parse::<f64>().unwrap_or(0.0);
        let metadata = match existing {
            Some(prev) => {
                let mut metadata = prev.metadata.clone();
                metadata.touch();
                metadata
            }
            None => EntityMetadata::new(),
        };
        DoseRecord {
            id: existing.map(|r| r.id).unwrap_or(id),
            worker_name: self.worker_name.trim().to_string(),
            badge_no: self.badge_no.trim().to_string(),
            period: self.period.trim().to_string(),
            dose_msv,
            limit_msv,
            status: dose_status(dose_msv, limit_msv),
            metadata,
        }
    }
}

impl Validate for DoseDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "worker_name", &self.worker_name, "Nama pekerja");
        require_text(&mut errors, "badge_no", &self.badge_no, "Nomor badge");
        require_text(&mut errors, "period", &self.period, "Periode");
        // Measured dose may legitimately be 0; only the limit must be positive.
        if self.dose_msv.trim().is_empty() {
            errors.push("dose_msv", "Dosis wajib diisi");
        } else if self.dose_msv.trim().parse::<f64>().map(|v| v < 0.0).unwrap_or(true) {
            errors.push("dose_msv", "Dosis bukan angka yang valid");
        }
        require_amount(&mut errors, "limit_msv", &self.limit_msv, "Batas dosis");
        errors.into_result()
    }
}

// ============================================================================
// Sample data
// ============================================================================

fn seed(id: i64, worker: &str, badge: &str, period: &str, dose: f64, limit: f64) -> DoseRecord {
    DoseRecord {
        id,
        worker_name: worker.to_string(),
        badge_no: badge.to_string(),
        period: period.to_string(),
        dose_msv: dose,
        limit_msv: limit,
        status: dose_status(dose, limit),
        metadata: EntityMetadata::new(),
    }
}

/// Seed data shown on every load. The store is never persisted.
pub fn sample_doses() -> Vec<DoseRecord> {
    vec![
        seed(7, "Agus Santoso", "TLD-0147", "2026-07", 19.1, 20.0),
        seed(6, "Rina Kusuma", "TLD-0139", "2026-07", 15.3, 20.0),
        seed(5, "Budi Prasetyo", "TLD-0121", "2026-07", 6.8, 20.0),
        seed(4, "Siti Nurhaliza", "TLD-0118", "2026-07", 2.4, 20.0),
        seed(3, "Agus Santoso", "TLD-0147", "2026-06", 14.9, 20.0),
        seed(2, "Rina Kusuma", "TLD-0139", "2026-06", 11.2, 20.0),
        seed(1, "Budi Prasetyo", "TLD-0121", "2026-06", 4.1, 20.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dose_thresholds() {
        assert_eq!(dose_status(17.9, 20.0), DoseStatus::Warning);
        assert_eq!(dose_status(18.0, 20.0), DoseStatus::Critical);
        assert_eq!(dose_status(14.0, 20.0), DoseStatus::Warning);
        assert_eq!(dose_status(13.9, 20.0), DoseStatus::Normal);
        assert_eq!(dose_status(0.0, 20.0), DoseStatus::Normal);
    }

    #[test]
    fn test_zero_limit_is_critical() {
        assert_eq!(dose_status(1.0, 0.0), DoseStatus::Critical);
    }

    #[test]
    fn test_build_recomputes_status_on_update() {
        let record = seed(1, "Budi Prasetyo", "TLD-0121", "2026-07", 4.0, 20.0);
        assert_eq!(record.status, DoseStatus::Normal);

        let mut draft = DoseDraft::from_record(&record);
        draft.dose_msv = "19.5".into();
        let rebuilt = draft.build(99, Some(&record));

        // Identity survives the edit; status is re-derived.
        assert_eq!(rebuilt.id, 1);
        assert_eq!(rebuilt.status, DoseStatus::Critical);
        assert_eq!(rebuilt.metadata.created_at, record.metadata.created_at);
    }

    #[test]
    fn test_draft_rejects_negative_dose() {
        let mut draft = DoseDraft::template("2026-08");
        draft.worker_name = "Agus Santoso".into();
        draft.badge_no = "TLD-0147".into();
        draft.dose_msv = "-1".into();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("dose_msv"), Some("Dosis bukan angka yang valid"));
    }

    #[test]
    fn test_zero_dose_is_valid() {
        let mut draft = DoseDraft::template("2026-08");
        draft.worker_name = "Agus Santoso".into();
        draft.badge_no = "TLD-0147".into();
        draft.dose_msv = "0".into();
        assert!(draft.validate().is_ok());
    }
}
