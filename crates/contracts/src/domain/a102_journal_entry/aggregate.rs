use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::crud::store::StoreRecord;
use crate::shared::crud::validate::{require_amount, require_date, require_text, FieldErrors, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique journal entry identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JournalEntryId(pub Uuid);

impl JournalEntryId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for JournalEntryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(JournalEntryId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

pub const CODE_PREFIX: &str = "JRN";

/// Chart-of-accounts subset offered by the line editor.
pub const ACCOUNTS: [&str; 6] = [
    "1101 Kas",
    "1102 Bank",
    "1201 Piutang Usaha",
    "2101 Hutang Usaha",
    "5101 Beban Operasional",
    "4101 Pendapatan Jasa",
];

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntrySide {
    Debit,
    Credit,
}

impl EntrySide {
    pub fn label(self) -> &'static str {
        match self {
            Self::Debit => "Debit",
            Self::Credit => "Kredit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    pub account: String,
    pub side: EntrySide,
    pub amount: f64,
}

/// Derived balance status. Never settable independently: recomputed from
/// the lines by [`journal_status`] on every create/update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalStatus {
    Balanced,
    Unbalanced,
}

impl JournalStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Balanced => "Seimbang",
            Self::Unbalanced => "Tidak Seimbang",
        }
    }

    /// Stable key used by filter selects.
    pub fn key(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Unbalanced => "unbalanced",
        }
    }
}

/// The single derived-status function used by both create and update.
pub fn journal_status(lines: &[JournalLine]) -> JournalStatus {
    let debit: f64 = lines
        .iter()
        .filter(|l| l.side == EntrySide::Debit)
        .map(|l| l.amount)
        .sum();
    let credit: f64 = lines
        .iter()
        .filter(|l| l.side == EntrySide::Credit)
        .map(|l| l.amount)
        .sum();
    // Amounts are rupiah with at most two decimals; half a cent of drift
    // counts as balanced.
    if (debit - credit).abs() < 0.005 {
        JournalStatus::Balanced
    } else {
        JournalStatus::Unbalanced
    }
}

/// Jurnal umum (general journal entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(flatten)]
    pub base: BaseAggregate<JournalEntryId>,

    pub entry_date: NaiveDate,
    pub lines: Vec<JournalLine>,
    pub debit_total: f64,
    pub credit_total: f64,
    pub status: JournalStatus,
}

impl JournalEntry {
    pub fn totals_of(lines: &[JournalLine]) -> (f64, f64) {
        let debit: f64 = lines
            .iter()
            .filter(|l| l.side == EntrySide::Debit)
            .map(|l| l.amount)
            .sum();
        let credit: f64 = lines
            .iter()
            .filter(|l| l.side == EntrySide::Credit)
            .map(|l| l.amount)
            .sum();
        (debit, credit)
    }
}

impl StoreRecord for JournalEntry {
    type Id = JournalEntryId;

    fn record_id(&self) -> JournalEntryId {
        self.base.id
    }

    fn display_label(&self) -> String {
        self.base.code.clone()
    }
}

// ============================================================================
// Editor draft
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct JournalLineDraft {
    pub account: String,
    /// "debit" | "credit", mirroring the side selector.
    pub side: String,
    pub amount: String,
}

impl Default for JournalLineDraft {
    fn default() -> Self {
        Self {
            account: String::new(),
            side: "debit".to_string(),
            amount: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalDraft {
    /// Memo / description of the transaction.
    pub description: String,
    pub entry_date: String,
    pub lines: Vec<JournalLineDraft>,
}

impl JournalDraft {
    /// Template for create mode: one debit and one credit line.
    pub fn template(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            entry_date: today.format("%Y-%m-%d").to_string(),
            lines: vec![
                JournalLineDraft::default(),
                JournalLineDraft {
                    side: "credit".to_string(),
                    ..JournalLineDraft::default()
                },
            ],
        }
    }

    pub fn from_record(entry: &JournalEntry) -> Self {
        Self {
            description: entry.base.description.clone(),
            entry_date: entry.entry_date.format("%Y-%m-%d").to_string(),
            lines: entry
                .lines
                .iter()
                .map(|l| JournalLineDraft {
                    account: l.account.clone(),
                    side: match l.side {
                        EntrySide::Debit => "debit".to_string(),
                        EntrySide::Credit => "credit".to_string(),
                    },
                    amount: l.amount.to_string(),
                })
                .collect(),
        }
    }

    fn parsed_lines(&self, errors: &mut FieldErrors) -> Vec<JournalLine> {
        if self.lines.len() < 2 {
            errors.push("lines", "Jurnal minimal dua baris (debit dan kredit)");
        }
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let row = i + 1;
                if line.account.trim().is_empty() {
                    errors.push("lines", format!("Baris {}: akun wajib dipilih", row));
                }
                let amount = require_amount(
                    errors,
                    "lines",
                    &line.amount,
                    &format!("Baris {}: jumlah", row),
                );
                JournalLine {
                    account: line.account.trim().to_string(),
                    side: if line.side == "credit" {
                        EntrySide::Credit
                    } else {
                        EntrySide::Debit
                    },
                    amount,
                }
            })
            .collect()
    }

    pub fn build(
        &self,
        id: JournalEntryId,
        code: String,
        existing: Option<&JournalEntry>,
    ) -> JournalEntry {
        let mut ignored = FieldErrors::new();
        let lines = self.parsed_lines(&mut ignored);
        let (debit_total, credit_total) = JournalEntry::totals_of(&lines);
        let entry_date =
            NaiveDate::parse_from_str(self.entry_date.trim(), "%Y-%m-%d").unwrap_or_default();

        let base = match existing {
            Some(prev) => {
                let mut base = prev.base.clone();
                base.description = self.description.trim().to_string();
                base.touch();
                base
            }
            None => BaseAggregate::new(id, code, self.description.trim().to_string()),
        };

        JournalEntry {
            base,
            entry_date,
            status: journal_status(&lines),
            lines,
            debit_total,
            credit_total,
        }
    }
}

impl Validate for JournalDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "description", &self.description, "Memo");
        require_date(&mut errors, "entry_date", &self.entry_date, "Tanggal");
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
    date: (i32, u32, u32),
    lines: Vec<(&str, EntrySide, f64)>,
) -> JournalEntry {
    let lines: Vec<JournalLine> = lines
        .into_iter()
        .map(|(account, side, amount)| JournalLine {
            account: account.to_string(),
            side,
            amount,
        })
        .collect();
    let (debit_total, credit_total) = JournalEntry::totals_of(&lines);
    JournalEntry {
        base: BaseAggregate::new(
            JournalEntryId::new_v4(),
            code.to_string(),
            description.to_string(),
        ),
        entry_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        status: journal_status(&lines),
        lines,
        debit_total,
        credit_total,
    }
}

/// Seed data shown on every load. The store is never persisted.
pub fn sample_entries() -> Vec<JournalEntry> {
    vec![
        seed(
            "JRN-2026-014",
            "Pembayaran hutang supplier bahan baku",
            (2026, 8, 4),
            vec![
                ("2101 Hutang Usaha", EntrySide::Debit, 12_500_000.0),
                ("1102 Bank", EntrySide::Credit, 12_500_000.0),
            ],
        ),
        seed(
            "JRN-2026-013",
            "Penerimaan pelunasan piutang PT Andalan",
            (2026, 8, 1),
            vec![
                ("1102 Bank", EntrySide::Debit, 8_750_000.0),
                ("1201 Piutang Usaha", EntrySide::Credit, 8_750_000.0),
            ],
        ),
        seed(
            "JRN-2026-012",
            "Koreksi beban operasional Juli (selisih kas kecil)",
            (2026, 7, 31),
            vec![
                ("5101 Beban Operasional", EntrySide::Debit, 450_000.0),
                ("1101 Kas", EntrySide::Credit, 425_000.0),
            ],
        ),
        seed(
            "JRN-2026-011",
            "Pendapatan jasa kalibrasi eksternal",
            (2026, 7, 24),
            vec![
                ("1101 Kas", EntrySide::Debit, 3_100_000.0),
                ("4101 Pendapatan Jasa", EntrySide::Credit, 3_100_000.0),
            ],
        ),
        seed(
            "JRN-2026-010",
            "Pembelian ATK tunai",
            (2026, 7, 18),
            vec![
                ("5101 Beban Operasional", EntrySide::Debit, 640_000.0),
                ("1101 Kas", EntrySide::Credit, 640_000.0),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(account: &str, side: EntrySide, amount: f64) -> JournalLine {
        JournalLine {
            account: account.to_string(),
            side,
            amount,
        }
    }

    #[test]
    fn test_status_balanced() {
        let lines = vec![
            line("1101 Kas", EntrySide::Debit, 1000.0),
            line("4101 Pendapatan Jasa", EntrySide::Credit, 1000.0),
        ];
        assert_eq!(journal_status(&lines), JournalStatus::Balanced);
    }

    #[test]
    fn test_status_unbalanced() {
        let lines = vec![
            line("1101 Kas", EntrySide::Debit, 1000.0),
            line("4101 Pendapatan Jasa", EntrySide::Credit, 999.0),
        ];
        assert_eq!(journal_status(&lines), JournalStatus::Unbalanced);
    }

    #[test]
    fn test_status_tolerates_rounding_drift() {
        let lines = vec![
            line("1101 Kas", EntrySide::Debit, 0.1 + 0.2),
            line("4101 Pendapatan Jasa", EntrySide::Credit, 0.3),
        ];
        assert_eq!(journal_status(&lines), JournalStatus::Balanced);
    }

    #[test]
    fn test_build_recomputes_totals_and_status() {
        let draft = JournalDraft {
            description: "Uji".into(),
            entry_date: "2026-08-05".into(),
            lines: vec![
                JournalLineDraft {
                    account: "1101 Kas".into(),
                    side: "debit".into(),
                    amount: "500000".into(),
                },
                JournalLineDraft {
                    account: "4101 Pendapatan Jasa".into(),
                    side: "credit".into(),
                    amount: "300000".into(),
                },
            ],
        };
        let entry = draft.build(JournalEntryId::new_v4(), "JRN-2026-099".into(), None);
        assert_eq!(entry.debit_total, 500_000.0);
        assert_eq!(entry.credit_total, 300_000.0);
        assert_eq!(entry.status, JournalStatus::Unbalanced);
    }

    #[test]
    fn test_draft_requires_two_lines() {
        let mut draft = JournalDraft::template(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
        draft.description = "Memo".into();
        draft.lines.truncate(1);
        draft.lines[0].account = "1101 Kas".into();
        draft.lines[0].amount = "100".into();
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get("lines"),
            Some("Jurnal minimal dua baris (debit dan kredit)")
        );
    }

    #[test]
    fn test_sample_entries_mostly_balanced() {
        let entries = sample_entries();
        // One intentionally unbalanced correction entry for the filter demo.
        let unbalanced = entries
            .iter()
            .filter(|e| e.status == JournalStatus::Unbalanced)
            .count();
        assert_eq!(unbalanced, 1);
    }
}
