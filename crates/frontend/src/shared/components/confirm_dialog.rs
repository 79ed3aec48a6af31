use crate::shared::icons::icon;
use leptos::prelude::*;

/// Two-step destructive action: the dialog names exactly one pending
/// target; confirming fires `on_confirm` once, dismissing does nothing.
#[component]
pub fn ConfirmDialog(
    title: String,
    /// Message naming the target record, e.g. "Hapus dokumen PV-2026-004?"
    message: String,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Hapus".to_string());

    view! {
        <div class="details-container confirm-dialog">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            <p class="confirm-dialog__message">{message}</p>

            <div class="details-actions">
                <button
                    class="btn btn-danger"
                    on:click=move |_| on_confirm.run(())
                >
                    {icon("delete")}
                    {confirm_label}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("cancel")}
                    {"Batal"}
                </button>
            </div>
        </div>
    }
}
