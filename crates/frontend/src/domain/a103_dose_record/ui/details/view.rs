use super::view_model::DoseDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a103_dose_record::{dose_status, DoseRecord};
use contracts::shared::crud::store::EntityStore;
use leptos::prelude::*;

#[component]
pub fn DoseDetails(
    store: RwSignal<EntityStore<DoseRecord>>,
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DoseDetailsViewModel::new(store, id);
    let form = vm.form;
    let errors = vm.errors;
    let pending = vm.guard.pending;

    let guard = vm.guard.clone();
    on_cleanup(move || guard.cancel());

    let field_error = move |field: &'static str| {
        move || {
            errors
                .get()
                .get(field)
                .map(|message| view! { <div class="field-error">{message.to_string()}</div> })
        }
    };

    // Status preview from the same derivation the commit will use.
    let status_preview = move || {
        let f = form.get();
        let dose = f.dose_msv.trim().parse::<f64>().ok()?;
        let limit = f.limit_msv.trim().parse::<f64>().ok()?;
        Some(dose_status(dose, limit).label())
    };

    let title = if vm.is_edit_mode() {
        "Ubah Data Dosis"
    } else {
        "Catat Dosis Baru"
    };

    let vm_save = vm.clone();

    view! {
        <div class="details-container dose-details">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            {move || errors.get().get("store").map(|e| view! { <div class="error">{e.to_string()}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="worker_name">{"Nama Pekerja"}</label>
                    <input
                        type="text"
                        id="worker_name"
                        prop:value=move || form.get().worker_name
                        on:input=move |ev| {
                            form.update(|f| f.worker_name = event_target_value(&ev));
                        }
                        placeholder="Nama pekerja radiasi"
                    />
                    {field_error("worker_name")}
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="badge_no">{"Nomor Badge"}</label>
                        <input
                            type="text"
                            id="badge_no"
                            prop:value=move || form.get().badge_no
                            on:input=move |ev| {
                                form.update(|f| f.badge_no = event_target_value(&ev));
                            }
                            placeholder="TLD-0000"
                        />
                        {field_error("badge_no")}
                    </div>

                    <div class="form-group">
                        <label for="period">{"Periode"}</label>
                        <input
                            type="month"
                            id="period"
                            prop:value=move || form.get().period
                            on:change=move |ev| {
                                form.update(|f| f.period = event_target_value(&ev));
                            }
                        />
                        {field_error("period")}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="dose_msv">{"Dosis (mSv)"}</label>
                        <input
                            type="text"
                            id="dose_msv"
                            prop:value=move || form.get().dose_msv
                            on:input=move |ev| {
                                form.update(|f| f.dose_msv = event_target_value(&ev));
                            }
                            placeholder="0.0"
                        />
                        {field_error("dose_msv")}
                    </div>

                    <div class="form-group">
                        <label for="limit_msv">{"Batas Periode (mSv)"}</label>
                        <input
                            type="text"
                            id="limit_msv"
                            prop:value=move || form.get().limit_msv
                            on:input=move |ev| {
                                form.update(|f| f.limit_msv = event_target_value(&ev));
                            }
                            placeholder="20"
                        />
                        {field_error("limit_msv")}
                    </div>
                </div>

                {move || status_preview().map(|label| view! {
                    <div class="form-group">
                        <label>{"Status (otomatis)"}</label>
                        <span class="status-preview">{label}</span>
                    </div>
                })}
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || pending.get()
                    on:click=move |_| vm_save.save_command(store, on_saved)
                >
                    {icon("save")}
                    {move || if pending.get() { "Menyimpan..." } else { "Simpan" }}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let guard = vm.guard.clone();
                        move |_| {
                            guard.cancel();
                            on_cancel.run(());
                        }
                    }
                >
                    {icon("cancel")}
                    {"Batal"}
                </button>
            </div>
        </div>
    }
}
