use crate::shared::icons::icon;
use contracts::shared::crud::lifecycle::Decision;
use leptos::prelude::*;

/// Approval action modal: the only way a document leaves `Pending`.
///
/// The justification (keterangan) is mandatory; confirm stays disabled
/// until one is entered.
#[component]
pub fn ApprovalActionModal(
    /// Document code shown in the title, e.g. "PV-2026-004".
    code: String,
    decision: Decision,
    /// Receives the trimmed keterangan.
    on_confirm: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (keterangan, set_keterangan) = signal(String::new());

    let title = match decision {
        Decision::Approve => format!("Setujui Dokumen {}", code),
        Decision::Reject => format!("Tolak Dokumen {}", code),
    };
    let confirm_class = match decision {
        Decision::Approve => "btn btn-primary",
        Decision::Reject => "btn btn-danger",
    };
    let confirm_icon = match decision {
        Decision::Approve => "check",
        Decision::Reject => "x",
    };

    let can_confirm = move || !keterangan.get().trim().is_empty();

    view! {
        <div class="details-container approval-modal">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="keterangan">{"Keterangan"}</label>
                    <textarea
                        id="keterangan"
                        prop:value=move || keterangan.get()
                        on:input=move |ev| set_keterangan.set(event_target_value(&ev))
                        placeholder="Alasan persetujuan/penolakan (wajib)"
                        rows="3"
                    />
                    {move || if can_confirm() {
                        view! { <></> }.into_any()
                    } else {
                        view! { <div class="field-error">{"Keterangan wajib diisi"}</div> }.into_any()
                    }}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class=confirm_class
                    disabled=move || !can_confirm()
                    on:click=move |_| {
                        let value = keterangan.get().trim().to_string();
                        if !value.is_empty() {
                            on_confirm.run(value);
                        }
                    }
                >
                    {icon(confirm_icon)}
                    {decision.label()}
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
