use contracts::shared::crud::lifecycle::ApprovalStatus;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            Self::Neutral => "status-badge status-badge--neutral",
            Self::Info => "status-badge status-badge--info",
            Self::Success => "status-badge status-badge--success",
            Self::Warning => "status-badge status-badge--warning",
            Self::Danger => "status-badge status-badge--danger",
        }
    }
}

/// Colored status chip used in table cells.
#[component]
pub fn StatusBadge(label: &'static str, tone: BadgeTone) -> impl IntoView {
    view! {
        <span class=tone.class()>{label}</span>
    }
}

pub fn approval_tone(status: ApprovalStatus) -> BadgeTone {
    match status {
        ApprovalStatus::Draft => BadgeTone::Neutral,
        ApprovalStatus::Pending => BadgeTone::Info,
        ApprovalStatus::Approved => BadgeTone::Success,
        ApprovalStatus::Rejected => BadgeTone::Danger,
    }
}
