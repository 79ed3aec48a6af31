use super::view_model::EquipmentDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a104_equipment_check::{qc_status, EquipmentCheck};
use contracts::shared::crud::store::EntityStore;
use leptos::prelude::*;

#[component]
pub fn EquipmentDetails(
    store: RwSignal<EntityStore<EquipmentCheck>>,
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = EquipmentDetailsViewModel::new(store, id);
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

    let status_preview = move || {
        let f = form.get();
        let deviation = f.deviation.trim().parse::<f64>().ok()?;
        let tolerance = f.tolerance.trim().parse::<f64>().ok()?;
        Some(qc_status(deviation, tolerance).label())
    };

    let title = if vm.is_edit_mode() {
        "Ubah Hasil Pemeriksaan"
    } else {
        "Catat Pemeriksaan Baru"
    };

    let vm_save = vm.clone();

    view! {
        <div class="details-container equipment-details">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            {move || errors.get().get("store").map(|e| view! { <div class="error">{e.to_string()}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="equipment_name">{"Nama Alat"}</label>
                    <input
                        type="text"
                        id="equipment_name"
                        prop:value=move || form.get().equipment_name
                        on:input=move |ev| {
                            form.update(|f| f.equipment_name = event_target_value(&ev));
                        }
                        placeholder="Nama alat ukur"
                    />
                    {field_error("equipment_name")}
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="serial_no">{"Nomor Seri"}</label>
                        <input
                            type="text"
                            id="serial_no"
                            prop:value=move || form.get().serial_no
                            on:input=move |ev| {
                                form.update(|f| f.serial_no = event_target_value(&ev));
                            }
                            placeholder="XX-0000"
                        />
                        {field_error("serial_no")}
                    </div>

                    <div class="form-group">
                        <label for="location">{"Lokasi"}</label>
                        <input
                            type="text"
                            id="location"
                            prop:value=move || form.get().location
                            on:input=move |ev| {
                                form.update(|f| f.location = event_target_value(&ev));
                            }
                            placeholder="Lokasi penempatan"
                        />
                        {field_error("location")}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="checked_on">{"Tanggal Periksa"}</label>
                        <input
                            type="date"
                            id="checked_on"
                            prop:value=move || form.get().checked_on
                            on:change=move |ev| {
                                form.update(|f| f.checked_on = event_target_value(&ev));
                            }
                        />
                        {field_error("checked_on")}
                    </div>

                    <div class="form-group">
                        <label for="deviation">{"Deviasi Terukur"}</label>
                        <input
                            type="text"
                            id="deviation"
                            prop:value=move || form.get().deviation
                            on:input=move |ev| {
                                form.update(|f| f.deviation = event_target_value(&ev));
                            }
                            placeholder="0.0"
                        />
                        {field_error("deviation")}
                    </div>

                    <div class="form-group">
                        <label for="tolerance">{"Toleransi"}</label>
                        <input
                            type="text"
                            id="tolerance"
                            prop:value=move || form.get().tolerance
                            on:input=move |ev| {
                                form.update(|f| f.tolerance = event_target_value(&ev));
                            }
                            placeholder="0.0"
                        />
                        {field_error("tolerance")}
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
