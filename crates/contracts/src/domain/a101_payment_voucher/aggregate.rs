use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::crud::lifecycle::{record_once, Approval, Decision, LifecycleError};
use crate::shared::crud::store::StoreRecord;
use crate::shared::crud::validate::{require_amount, require_date, require_text, FieldErrors, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique payment voucher identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoucherId(pub Uuid);

impl VoucherId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for VoucherId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(VoucherId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

pub const CODE_PREFIX: &str = "PV";

/// Departments a voucher can be charged to (exact-match filter options).
pub const DEPARTMENTS: [&str; 4] = ["Keuangan", "Produksi", "Logistik", "Umum & HRD"];

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherLine {
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Transfer,
    Tunai,
    Giro,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Transfer => "Transfer Bank",
            Self::Tunai => "Tunai",
            Self::Giro => "Cek/Giro",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "transfer" => Some(Self::Transfer),
            "tunai" => Some(Self::Tunai),
            "giro" => Some(Self::Giro),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::Tunai => "tunai",
            Self::Giro => "giro",
        }
    }
}

/// One-shot payment record attached to an approved voucher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub method: PaymentMethod,
    /// Bank/cheque reference number.
    pub reference: String,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

/// Bukti pengeluaran kas (payment voucher)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentVoucher {
    #[serde(flatten)]
    pub base: BaseAggregate<VoucherId>,

    pub payee: String,
    pub department: String,
    pub voucher_date: NaiveDate,
    pub lines: Vec<VoucherLine>,
    /// Derived: sum of line amounts, recomputed on every create/update.
    pub total: f64,
    pub approval: Approval,
    pub payment: Option<PaymentInfo>,
}

impl PaymentVoucher {
    /// The single derived-total function used by both create and update.
    pub fn total_of(lines: &[VoucherLine]) -> f64 {
        lines.iter().map(|l| l.amount).sum()
    }

    pub fn submit(&mut self) -> Result<(), LifecycleError> {
        self.approval.submit()?;
        self.base.touch();
        Ok(())
    }

    pub fn decide(&mut self, decision: Decision, keterangan: &str) -> Result<(), LifecycleError> {
        self.approval.decide(decision, keterangan)?;
        self.base.touch();
        Ok(())
    }

    /// Record the payment method once the voucher is approved. Terminal
    /// and informational: the status does not change further.
    pub fn record_payment(
        &mut self,
        method: PaymentMethod,
        reference: &str,
    ) -> Result<(), LifecycleError> {
        record_once(
            &self.approval,
            &mut self.payment,
            PaymentInfo {
                method,
                reference: reference.trim().to_string(),
                recorded_at: chrono::Utc::now(),
            },
        )?;
        self.base.touch();
        Ok(())
    }
}

impl StoreRecord for PaymentVoucher {
    type Id = VoucherId;

    fn record_id(&self) -> VoucherId {
        self.base.id
    }

    fn display_label(&self) -> String {
        self.base.code.clone()
    }
}

// ============================================================================
// Editor draft
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoucherLineDraft {
    pub description: String,
    /// Form input, parsed at validation time.
    pub amount: String,
}

/// Detached editor copy of a voucher. Field types mirror the form inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoucherDraft {
    pub description: String,
    pub payee: String,
    pub department: String,
    pub voucher_date: String,
    pub lines: Vec<VoucherLineDraft>,
}

impl VoucherDraft {
    /// Empty template for create mode: one blank line, today's date.
    pub fn template(today: NaiveDate) -> Self {
        Self {
            voucher_date: today.format("%Y-%m-%d").to_string(),
            lines: vec![VoucherLineDraft::default()],
            ..Self::default()
        }
    }

    /// Deep copy of an existing voucher for edit mode.
    pub fn from_record(voucher: &PaymentVoucher) -> Self {
        Self {
            description: voucher.base.description.clone(),
            payee: voucher.payee.clone(),
            department: voucher.department.clone(),
            voucher_date: voucher.voucher_date.format("%Y-%m-%d").to_string(),
            lines: voucher
                .lines
                .iter()
                .map(|l| VoucherLineDraft {
                    description: l.description.clone(),
                    amount: l.amount.to_string(),
                })
                .collect(),
        }
    }

    fn parsed_lines(&self, errors: &mut FieldErrors) -> Vec<VoucherLine> {
        if self.lines.is_empty() {
            errors.push("lines", "Minimal satu baris rincian");
            return Vec::new();
        }
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let row = i + 1;
                if line.description.trim().is_empty() {
                    errors.push("lines", format!("Baris {}: uraian wajib diisi", row));
                }
                let amount = require_amount(
                    errors,
                    "lines",
                    &line.amount,
                    &format!("Baris {}: jumlah", row),
                );
                VoucherLine {
                    description: line.description.trim().to_string(),
                    amount,
                }
            })
            .collect()
    }

    /// Build a full record from a validated draft. In edit mode identity,
    /// code, approval trail, payment info and created_at carry over.
    pub fn build(
        &self,
        id: VoucherId,
        code: String,
        existing: Option<&PaymentVoucher>,
    ) -> PaymentVoucher {
        let mut ignored = FieldErrors::new();
        let lines = self.parsed_lines(&mut ignored);
        let voucher_date = NaiveDate::parse_from_str(self.voucher_date.trim(), "%Y-%m-%d")
            .unwrap_or_default();

        let base = match existing {
            Some(prev) => {
                let mut base = prev.base.clone();
                base.description = self.description.trim().to_string();
                base.touch();
                base
            }
            None => BaseAggregate::new(id, code, self.description.trim().to_string()),
        };

        PaymentVoucher {
            base,
            payee: self.payee.trim().to_string(),
            department: self.department.clone(),
            voucher_date,
            total: PaymentVoucher::total_of(&lines),
            lines,
            approval: existing.map(|p| p.approval.clone()).unwrap_or_default(),
            payment: existing.and_then(|p| p.payment.clone()),
        }
    }
}

impl Validate for VoucherDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "description", &self.description, "Keperluan");
        require_text(&mut errors, "payee", &self.payee, "Dibayarkan kepada");
        require_text(&mut errors, "department", &self.department, "Departemen");
        require_date(&mut errors, "voucher_date", &self.voucher_date, "Tanggal");
        self.parsed_lines(&mut errors);
        errors.into_result()
    }
}

// ============================================================================
// Sample data
// ============================================================================

fn seed(
    code: &str,
    description: &str,
    payee: &str,
    department: &str,
    date: (i32, u32, u32),
    lines: Vec<(&str, f64)>,
    approval: Approval,
) -> PaymentVoucher {
    let lines: Vec<VoucherLine> = lines
        .into_iter()
        .map(|(d, a)| VoucherLine {
            description: d.to_string(),
            amount: a,
        })
        .collect();
    PaymentVoucher {
        base: BaseAggregate::new(VoucherId::new_v4(), code.to_string(), description.to_string()),
        payee: payee.to_string(),
        department: department.to_string(),
        voucher_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        total: PaymentVoucher::total_of(&lines),
        lines,
        approval,
        payment: None,
    }
}

/// Seed data shown on every load. The store is never persisted.
pub fn sample_vouchers() -> Vec<PaymentVoucher> {
    let mut rejected = Approval::pending();
    let _ = rejected.decide(Decision::Reject, "Bukti pendukung belum lengkap");
    let mut approved = Approval::pending();
    let _ = approved.decide(Decision::Approve, "Sesuai anggaran Q3");

    vec![
        seed(
            "PV-2026-006",
            "Biaya perjalanan dinas audit cabang",
            "Rahmat Hidayat",
            "Keuangan",
            (2026, 8, 3),
            vec![("Tiket kereta PP", 850_000.0), ("Penginapan 2 malam", 1_100_000.0)],
            Approval::draft(),
        ),
        seed(
            "PV-2026-005",
            "Pembelian ATK bulan Agustus",
            "PT Sumber Makmur",
            "Umum & HRD",
            (2026, 8, 1),
            vec![("Kertas A4 20 rim", 900_000.0), ("Tinta printer", 640_000.0)],
            Approval::pending(),
        ),
        seed(
            "PV-2026-004",
            "Servis forklift gudang",
            "CV Teknik Jaya",
            "Logistik",
            (2026, 7, 28),
            vec![("Jasa servis rutin", 2_500_000.0)],
            Approval::pending(),
        ),
        seed(
            "PV-2026-003",
            "Kalibrasi timbangan produksi",
            "PT Kalibrasi Nusantara",
            "Produksi",
            (2026, 7, 21),
            vec![("Kalibrasi 3 unit", 4_200_000.0)],
            approved,
        ),
        seed(
            "PV-2026-002",
            "Penggantian biaya pengiriman sampel",
            "Dewi Lestari",
            "Logistik",
            (2026, 7, 15),
            vec![("Kurir ekspres", 320_000.0)],
            rejected,
        ),
        seed(
            "PV-2026-001",
            "Konsumsi rapat koordinasi bulanan",
            "Katering Berkah",
            "Umum & HRD",
            (2026, 7, 7),
            vec![("Konsumsi 40 orang", 1_600_000.0)],
            Approval::pending(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::store::EntityStore;

    fn valid_draft() -> VoucherDraft {
        VoucherDraft {
            description: "Pembelian sparepart".into(),
            payee: "CV Maju Bersama".into(),
            department: "Produksi".into(),
            voucher_date: "2026-08-05".into(),
            lines: vec![
                VoucherLineDraft {
                    description: "Bearing 6204".into(),
                    amount: "250000".into(),
                },
                VoucherLineDraft {
                    description: "V-belt".into(),
                    amount: "175000".into(),
                },
            ],
        }
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let draft = valid_draft();
        let voucher = draft.build(VoucherId::new_v4(), "PV-2026-010".into(), None);
        assert_eq!(voucher.total, 425_000.0);
        assert_eq!(voucher.approval.status.label(), "Draft");
    }

    #[test]
    fn test_draft_validation_collects_field_errors() {
        let mut draft = valid_draft();
        draft.payee.clear();
        draft.lines[1].amount = "abc".into();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("payee"), Some("Dibayarkan kepada wajib diisi"));
        assert_eq!(
            errors.get("lines"),
            Some("Baris 2: jumlah bukan angka yang valid")
        );
    }

    #[test]
    fn test_empty_lines_rejected() {
        let mut draft = valid_draft();
        draft.lines.clear();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("lines"), Some("Minimal satu baris rincian"));
    }

    #[test]
    fn test_edit_build_preserves_identity_and_trail() {
        let mut voucher = valid_draft().build(VoucherId::new_v4(), "PV-2026-011".into(), None);
        voucher.submit().unwrap();
        voucher.decide(Decision::Approve, "ok").unwrap();

        let mut draft = VoucherDraft::from_record(&voucher);
        draft.payee = "CV Maju Bersama (revisi)".into();
        let rebuilt = draft.build(voucher.base.id, String::new(), Some(&voucher));

        assert_eq!(rebuilt.base.id, voucher.base.id);
        assert_eq!(rebuilt.base.code, "PV-2026-011");
        assert_eq!(rebuilt.approval, voucher.approval);
        assert_eq!(rebuilt.payee, "CV Maju Bersama (revisi)");
        assert_eq!(
            rebuilt.base.metadata.created_at,
            voucher.base.metadata.created_at
        );
    }

    #[test]
    fn test_reject_then_actions_gone() {
        // Rejecting a pending voucher stores the keterangan and removes
        // the decide actions.
        let mut store = EntityStore::seeded(sample_vouchers());
        let id = store
            .iter()
            .find(|v| v.approval.status.can_decide())
            .map(|v| v.record_id())
            .unwrap();

        let mut voucher = store.get(&id).cloned().unwrap();
        voucher.decide(Decision::Reject, "Data Tidak Lengkap").unwrap();
        store.update(voucher).unwrap();

        let stored = store.get(&id).unwrap();
        assert!(!stored.approval.status.can_decide());
        assert_eq!(stored.approval.keterangan.as_deref(), Some("Data Tidak Lengkap"));
    }

    #[test]
    fn test_payment_method_is_one_shot() {
        let mut voucher = valid_draft().build(VoucherId::new_v4(), "PV-2026-012".into(), None);
        assert!(voucher.record_payment(PaymentMethod::Tunai, "KAS-01").is_err());

        voucher.submit().unwrap();
        voucher.decide(Decision::Approve, "ok").unwrap();
        voucher
            .record_payment(PaymentMethod::Transfer, "TRF-7781")
            .unwrap();
        assert_eq!(
            voucher.payment.as_ref().map(|p| p.method),
            Some(PaymentMethod::Transfer)
        );

        let err = voucher.record_payment(PaymentMethod::Giro, "CG-02").unwrap_err();
        assert_eq!(err, LifecycleError::PaymentAlreadyRecorded);
    }

    #[test]
    fn test_sample_codes_unique() {
        let vouchers = sample_vouchers();
        let mut codes: Vec<&str> = vouchers.iter().map(|v| v.base.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), vouchers.len());
    }
}
