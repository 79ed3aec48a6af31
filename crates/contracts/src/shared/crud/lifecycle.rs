use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Approval workflow states shared by the document dashboards.
///
/// `Draft → Pending → {Approved, Rejected}`. There is no re-submit path
/// out of a decided state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Menunggu Persetujuan",
            Self::Approved => "Disetujui",
            Self::Rejected => "Ditolak",
        }
    }

    /// Stable key used by filter selects.
    pub fn key(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "draft" => Some(Self::Draft),
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Submit is offered only on drafts.
    pub fn can_submit(self) -> bool {
        self == Self::Draft
    }

    /// Approve/Reject actions are offered only while pending.
    pub fn can_decide(self) -> bool {
        self == Self::Pending
    }

    pub fn is_decided(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Setujui",
            Self::Reject => "Tolak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("transisi status tidak diizinkan dari {0:?}")]
    InvalidTransition(ApprovalStatus),
    #[error("keterangan wajib diisi")]
    MissingJustification,
    #[error("metode pembayaran sudah dicatat")]
    PaymentAlreadyRecorded,
    #[error("metode pembayaran hanya untuk dokumen yang disetujui")]
    PaymentNotApproved,
}

/// Approval state carried by a document record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub status: ApprovalStatus,
    /// Justification captured when the document left `Pending`.
    pub keterangan: Option<String>,
    pub decided_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Approval {
    pub fn draft() -> Self {
        Self {
            status: ApprovalStatus::Draft,
            keterangan: None,
            decided_at: None,
        }
    }

    pub fn pending() -> Self {
        Self {
            status: ApprovalStatus::Pending,
            keterangan: None,
            decided_at: None,
        }
    }

    /// `Draft → Pending`.
    pub fn submit(&mut self) -> Result<(), LifecycleError> {
        if !self.status.can_submit() {
            return Err(LifecycleError::InvalidTransition(self.status));
        }
        self.status = ApprovalStatus::Pending;
        Ok(())
    }

    /// `Pending → {Approved, Rejected}` with a mandatory justification.
    ///
    /// This is the only legal way out of `Pending`.
    pub fn decide(&mut self, decision: Decision, keterangan: &str) -> Result<(), LifecycleError> {
        if !self.status.can_decide() {
            return Err(LifecycleError::InvalidTransition(self.status));
        }
        let keterangan = keterangan.trim();
        if keterangan.is_empty() {
            return Err(LifecycleError::MissingJustification);
        }
        self.status = match decision {
            Decision::Approve => ApprovalStatus::Approved,
            Decision::Reject => ApprovalStatus::Rejected,
        };
        self.keterangan = Some(keterangan.to_string());
        self.decided_at = Some(chrono::Utc::now());
        Ok(())
    }
}

impl Default for Approval {
    fn default() -> Self {
        Self::draft()
    }
}

/// One-shot secondary action on an approved document: fill `slot` exactly
/// once. Does not change the approval status.
pub fn record_once<T>(
    approval: &Approval,
    slot: &mut Option<T>,
    value: T,
) -> Result<(), LifecycleError> {
    if approval.status != ApprovalStatus::Approved {
        return Err(LifecycleError::PaymentNotApproved);
    }
    if slot.is_some() {
        return Err(LifecycleError::PaymentAlreadyRecorded);
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_only_from_draft() {
        let mut approval = Approval::draft();
        approval.submit().unwrap();
        assert_eq!(approval.status, ApprovalStatus::Pending);

        let err = approval.submit().unwrap_err();
        assert_eq!(
            err,
            LifecycleError::InvalidTransition(ApprovalStatus::Pending)
        );
    }

    #[test]
    fn test_decide_requires_pending() {
        let mut approval = Approval::draft();
        let err = approval.decide(Decision::Approve, "ok").unwrap_err();
        assert_eq!(err, LifecycleError::InvalidTransition(ApprovalStatus::Draft));
    }

    #[test]
    fn test_decide_requires_justification() {
        let mut approval = Approval::pending();
        let err = approval.decide(Decision::Reject, "   ").unwrap_err();
        assert_eq!(err, LifecycleError::MissingJustification);
        assert_eq!(approval.status, ApprovalStatus::Pending);
    }

    #[test]
    fn test_reject_stores_keterangan() {
        let mut approval = Approval::pending();
        approval
            .decide(Decision::Reject, "Data Tidak Lengkap")
            .unwrap();
        assert_eq!(approval.status, ApprovalStatus::Rejected);
        assert_eq!(approval.keterangan.as_deref(), Some("Data Tidak Lengkap"));
        assert!(approval.decided_at.is_some());
        assert!(!approval.status.can_decide());
    }

    #[test]
    fn test_no_retransition_after_decision() {
        let mut approval = Approval::pending();
        approval.decide(Decision::Approve, "sesuai anggaran").unwrap();
        let err = approval.decide(Decision::Reject, "berubah pikiran").unwrap_err();
        assert_eq!(
            err,
            LifecycleError::InvalidTransition(ApprovalStatus::Approved)
        );
        assert_eq!(approval.status, ApprovalStatus::Approved);
    }

    #[test]
    fn test_record_once_is_one_shot_and_gated() {
        let mut approval = Approval::pending();
        let mut slot: Option<&str> = None;

        let err = record_once(&approval, &mut slot, "transfer").unwrap_err();
        assert_eq!(err, LifecycleError::PaymentNotApproved);

        approval.decide(Decision::Approve, "ok").unwrap();
        record_once(&approval, &mut slot, "transfer").unwrap();
        assert_eq!(slot, Some("transfer"));
        // Status unchanged by the secondary action.
        assert_eq!(approval.status, ApprovalStatus::Approved);

        let err = record_once(&approval, &mut slot, "tunai").unwrap_err();
        assert_eq!(err, LifecycleError::PaymentAlreadyRecorded);
        assert_eq!(slot, Some("transfer"));
    }

    #[test]
    fn test_gating_flags() {
        assert!(ApprovalStatus::Draft.can_submit());
        assert!(!ApprovalStatus::Pending.can_submit());
        assert!(ApprovalStatus::Pending.can_decide());
        assert!(!ApprovalStatus::Approved.can_decide());
        assert!(!ApprovalStatus::Rejected.can_decide());
        assert!(ApprovalStatus::Approved.is_decided());
    }
}
