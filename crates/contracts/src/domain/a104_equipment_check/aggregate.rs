use crate::domain::common::EntityMetadata;
use crate::shared::crud::store::StoreRecord;
use crate::shared::crud::validate::{require_amount, require_date, require_text, FieldErrors, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived QC verdict for a calibration check.
///
/// |deviation| ≤ tolerance ⇒ Passed; ≤ 2× tolerance ⇒ Quarantine
/// (recheck required); beyond that ⇒ Failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QcStatus {
    Passed,
    Quarantine,
    Failed,
}

impl QcStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Passed => "Lulus",
            Self::Quarantine => "Karantina",
            Self::Failed => "Gagal",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "passed" => Some(Self::Passed),
            "quarantine" => Some(Self::Quarantine),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Quarantine => "quarantine",
            Self::Failed => "failed",
        }
    }
}

/// The single derived-status function used by both create and update.
pub fn qc_status(deviation: f64, tolerance: f64) -> QcStatus {
    if tolerance <= 0.0 {
        return QcStatus::Failed;
    }
    let magnitude = deviation.abs();
    if magnitude <= tolerance {
        QcStatus::Passed
    } else if magnitude <= tolerance * 2.0 {
        QcStatus::Quarantine
    } else {
        QcStatus::Failed
    }
}

/// Pemeriksaan kalibrasi alat (equipment QC check row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentCheck {
    pub id: i64,
    pub equipment_name: String,
    pub serial_no: String,
    pub location: String,
    pub checked_on: NaiveDate,
    /// Measured deviation from the reference, in the instrument's unit.
    pub deviation: f64,
    pub tolerance: f64,
    /// Derived via [`qc_status`], never settable independently.
    pub status: QcStatus,
    pub metadata: EntityMetadata,
}

impl StoreRecord for EquipmentCheck {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_label(&self) -> String {
        format!("{} ({})", self.equipment_name, self.serial_no)
    }
}

// ============================================================================
// Editor draft
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentDraft {
    pub equipment_name: String,
    pub serial_no: String,
    pub location: String,
    pub checked_on: String,
    pub deviation: String,
    pub tolerance: String,
}

impl EquipmentDraft {
    pub fn template(today: NaiveDate) -> Self {
        Self {
            checked_on: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn from_record(record: &EquipmentCheck) -> Self {
        Self {
            equipment_name: record.equipment_name.clone(),
            serial_no: record.serial_no.clone(),
            location: record.location.clone(),
            checked_on: record.checked_on.format("%Y-%m-%d").to_string(),
            deviation: record.deviation.to_string(),
            tolerance: record.tolerance.to_string(),
        }
    }

    pub fn build(&self, id: i64, existing: Option<&EquipmentCheck>) -> EquipmentCheck {
        let deviation = self.deviation.trim().parse::<f64>().unwrap_or(0.0);
        let tolerance = self.tolerance.trim().parse::<f64>().unwrap_or(0.0);
        let checked_on =
            NaiveDate::parse_from_str(self.checked_on.trim(), "%Y-%m-%d").unwrap_or_default();
        let metadata = match existing {
            Some(prev) => {
                let mut metadata = prev.metadata.clone();
                metadata.touch();
                metadata
            }
            None => EntityMetadata::new(),
        };
        EquipmentCheck {
            id: existing.map(|r| r.id).unwrap_or(id),
            equipment_name: self.equipment_name.trim().to_string(),
            serial_no: self.serial_no.trim().to_string(),
            location: self.location.trim().to_string(),
            checked_on,
            deviation,
            tolerance,
            status: qc_status(deviation, tolerance),
            metadata,
        }
    }
}

impl Validate for EquipmentDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "equipment_name", &self.equipment_name, "Nama alat");
        require_text(&mut errors, "serial_no", &self.serial_no, "Nomor seri");
        require_text(&mut errors, "location", &self.location, "Lokasi");
        require_date(&mut errors, "checked_on", &self.checked_on, "Tanggal periksa");
        // Deviation may be negative or zero; it only has to be numeric.
        if self.deviation.trim().is_empty() {
            errors.push("deviation", "Deviasi wajib diisi");
        } else if self.deviation.trim().parse::<f64>().is_err() {
            errors.push("deviation", "Deviasi bukan angka yang valid");
        }
        require_amount(&mut errors, "tolerance", &self.tolerance, "Toleransi");
        errors.into_result()
    }
}

// ============================================================================
// Sample data
// ============================================================================

fn seed(
    id: i64,
    name: &str,
    serial: &str,
    location: &str,
    date: (i32, u32, u32),
    deviation: f64,
    tolerance: f64,
) -> EquipmentCheck {
    EquipmentCheck {
        id,
        equipment_name: name.to_string(),
        serial_no: serial.to_string(),
        location: location.to_string(),
        checked_on: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        deviation,
        tolerance,
        status: qc_status(deviation, tolerance),
        metadata: EntityMetadata::new(),
    }
}

/// Seed data shown on every load. The store is never persisted.
pub fn sample_checks() -> Vec<EquipmentCheck> {
    vec![
        seed(6, "Survey Meter", "SM-2203", "Lab Radiografi", (2026, 8, 4), 0.9, 0.5),
        seed(5, "Timbangan Analitik", "TA-0418", "Lab QC", (2026, 8, 2), 0.0004, 0.001),
        seed(4, "Dosimeter Saku", "DS-1107", "Gudang Sumber", (2026, 7, 29), 1.4, 0.5),
        seed(3, "pH Meter", "PH-0332", "Lab Kimia", (2026, 7, 22), 0.02, 0.05),
        seed(2, "Termokopel Oven", "TC-0915", "Produksi", (2026, 7, 18), 3.1, 2.0),
        seed(1, "Mikrometer", "MM-0211", "Workshop", (2026, 7, 10), 0.003, 0.01),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qc_thresholds() {
        assert_eq!(qc_status(0.5, 0.5), QcStatus::Passed);
        assert_eq!(qc_status(-0.5, 0.5), QcStatus::Passed);
        assert_eq!(qc_status(0.51, 0.5), QcStatus::Quarantine);
        assert_eq!(qc_status(1.0, 0.5), QcStatus::Quarantine);
        assert_eq!(qc_status(-1.01, 0.5), QcStatus::Failed);
    }

    #[test]
    fn test_zero_tolerance_fails() {
        assert_eq!(qc_status(0.0, 0.0), QcStatus::Failed);
    }

    #[test]
    fn test_build_derives_status() {
        let draft = EquipmentDraft {
            equipment_name: "Survey Meter".into(),
            serial_no: "SM-9999".into(),
            location: "Lab".into(),
            checked_on: "2026-08-05".into(),
            deviation: "-0.7".into(),
            tolerance: "0.5".into(),
        };
        let record = draft.build(10, None);
        assert_eq!(record.status, QcStatus::Quarantine);
        assert_eq!(record.id, 10);
    }

    #[test]
    fn test_negative_deviation_is_valid_input() {
        let draft = EquipmentDraft {
            equipment_name: "pH Meter".into(),
            serial_no: "PH-1".into(),
            location: "Lab Kimia".into(),
            checked_on: "2026-08-05".into(),
            deviation: "-0.01".into(),
            tolerance: "0.05".into(),
        };
        assert!(draft.validate().is_ok());
    }
}
