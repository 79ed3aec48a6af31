pub mod approval_modal;
pub mod confirm_dialog;
pub mod pagination_controls;
pub mod status_badge;
