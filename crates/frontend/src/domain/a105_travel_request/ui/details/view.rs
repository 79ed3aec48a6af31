use super::view_model::TravelDetailsViewModel;
use crate::shared::format::format_rupiah;
use crate::shared::icons::icon;
use contracts::domain::a105_travel_request::{TravelRequest, TravelRequestId, DEPARTMENTS};
use contracts::shared::crud::store::EntityStore;
use leptos::prelude::*;

#[component]
pub fn TravelDetails(
    store: RwSignal<EntityStore<TravelRequest>>,
    id: Option<TravelRequestId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = TravelDetailsViewModel::new(store, id);
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

    // Memos: notify only on real changes, so typing in a participant or
    // booking input does not rebuild the input under the cursor.
    let participant_count = Memo::new(move |_| form.with(|f| f.participants.len()));
    let booking_kind = Memo::new(move |_| form.with(|f| f.booking.kind.clone()));

    // Cost estimate from the same derivation the commit will use.
    let cost_preview = move || {
        let f = form.get();
        let participants = f
            .participants
            .iter()
            .filter(|p| !p.trim().is_empty())
            .count();
        f.booking.to_booking().estimated_cost(participants)
    };

    let title = if vm.is_edit_mode() {
        format!("Ubah Pengajuan {}", vm.code_preview)
    } else {
        format!("Pengajuan Baru ({})", vm.code_preview)
    };

    let vm_save = vm.clone();

    view! {
        <div class="details-container travel-details">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            {move || errors.get().get("store").map(|e| view! { <div class="error">{e.to_string()}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="description">{"Keperluan"}</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || form.get().description
                        on:input=move |ev| {
                            form.update(|f| f.description = event_target_value(&ev));
                        }
                        placeholder="Tujuan perjalanan dinas"
                    />
                    {field_error("description")}
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="requester">{"Pemohon"}</label>
                        <input
                            type="text"
                            id="requester"
                            prop:value=move || form.get().requester
                            on:input=move |ev| {
                                form.update(|f| f.requester = event_target_value(&ev));
                            }
                            placeholder="Nama pemohon"
                        />
                        {field_error("requester")}
                    </div>

                    <div class="form-group">
                        <label for="department">{"Departemen"}</label>
                        <select
                            id="department"
                            prop:value=move || form.get().department
                            on:change=move |ev| {
                                form.update(|f| f.department = event_target_value(&ev));
                            }
                        >
                            <option value="">{"Pilih departemen"}</option>
                            {DEPARTMENTS.iter().map(|d| view! {
                                <option value={d.to_string()}>{d.to_string()}</option>
                            }).collect_view()}
                        </select>
                        {field_error("department")}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="start_date">{"Tanggal Berangkat"}</label>
                        <input
                            type="date"
                            id="start_date"
                            prop:value=move || form.get().start_date
                            on:change=move |ev| {
                                form.update(|f| f.start_date = event_target_value(&ev));
                            }
                        />
                        {field_error("start_date")}
                    </div>

                    <div class="form-group">
                        <label for="end_date">{"Tanggal Kembali"}</label>
                        <input
                            type="date"
                            id="end_date"
                            prop:value=move || form.get().end_date
                            on:change=move |ev| {
                                form.update(|f| f.end_date = event_target_value(&ev));
                            }
                        />
                        {field_error("end_date")}
                    </div>
                </div>

                <div class="form-group">
                    <label>{"Peserta"}</label>
                    {move || {
                        (0..participant_count.get()).map(|i| {
                        let participant = form.with_untracked(|f| {
                            f.participants.get(i).cloned().unwrap_or_default()
                        });
                        view! {
                            <div class="participant-row">
                                <input
                                    type="text"
                                    prop:value=participant.clone()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| {
                                            if let Some(p) = f.participants.get_mut(i) {
                                                *p = value.clone();
                                            }
                                        });
                                    }
                                    placeholder="Nama peserta"
                                />
                                <button
                                    class="icon-button icon-button--danger"
                                    title="Hapus peserta"
                                    on:click=move |_| {
                                        form.update(|f| {
                                            if f.participants.len() > 1 {
                                                f.participants.remove(i);
                                            }
                                        });
                                    }
                                >
                                    {icon("delete")}
                                </button>
                            </div>
                        }
                        }).collect_view()
                    }}
                    <button
                        class="button button--secondary button--small"
                        on:click=move |_| {
                            form.update(|f| f.participants.push(String::new()));
                        }
                    >
                        {icon("plus")}
                        {"Tambah Peserta"}
                    </button>
                    {field_error("participants")}
                </div>

                <div class="form-group">
                    <label for="booking_kind">{"Jenis Pemesanan"}</label>
                    <select
                        id="booking_kind"
                        prop:value=move || form.get().booking.kind
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.booking.kind = value);
                        }
                    >
                        <option value="flight">{"Tiket Pesawat"}</option>
                        <option value="hotel">{"Hotel"}</option>
                        <option value="travel_cost">{"Uang Harian"}</option>
                    </select>
                    {field_error("booking_kind")}
                </div>

                {move || {
                    match booking_kind.get().as_str() {
                        "flight" => view! {
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="airline">{"Maskapai"}</label>
                                    <input
                                        type="text"
                                        id="airline"
                                        prop:value=move || form.get().booking.airline
                                        on:input=move |ev| {
                                            form.update(|f| f.booking.airline = event_target_value(&ev));
                                        }
                                        placeholder="Nama maskapai"
                                    />
                                    {field_error("airline")}
                                </div>
                                <div class="form-group">
                                    <label for="route">{"Rute"}</label>
                                    <input
                                        type="text"
                                        id="route"
                                        prop:value=move || form.get().booking.route
                                        on:input=move |ev| {
                                            form.update(|f| f.booking.route = event_target_value(&ev));
                                        }
                                        placeholder="CGK-SUB"
                                    />
                                    {field_error("route")}
                                </div>
                                <div class="form-group">
                                    <label for="fare">{"Harga Tiket (Rp)"}</label>
                                    <input
                                        type="text"
                                        id="fare"
                                        prop:value=move || form.get().booking.fare
                                        on:input=move |ev| {
                                            form.update(|f| f.booking.fare = event_target_value(&ev));
                                        }
                                        placeholder="0"
                                    />
                                    {field_error("fare")}
                                </div>
                            </div>
                        }.into_any(),
                        "hotel" => view! {
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="hotel">{"Nama Hotel"}</label>
                                    <input
                                        type="text"
                                        id="hotel"
                                        prop:value=move || form.get().booking.hotel
                                        on:input=move |ev| {
                                            form.update(|f| f.booking.hotel = event_target_value(&ev));
                                        }
                                        placeholder="Nama hotel"
                                    />
                                    {field_error("hotel")}
                                </div>
                                <div class="form-group">
                                    <label for="nights">{"Jumlah Malam"}</label>
                                    <input
                                        type="text"
                                        id="nights"
                                        prop:value=move || form.get().booking.nights
                                        on:input=move |ev| {
                                            form.update(|f| f.booking.nights = event_target_value(&ev));
                                        }
                                        placeholder="1"
                                    />
                                    {field_error("nights")}
                                </div>
                                <div class="form-group">
                                    <label for="rate_per_night">{"Tarif per Malam (Rp)"}</label>
                                    <input
                                        type="text"
                                        id="rate_per_night"
                                        prop:value=move || form.get().booking.rate_per_night
                                        on:input=move |ev| {
                                            form.update(|f| f.booking.rate_per_night = event_target_value(&ev));
                                        }
                                        placeholder="0"
                                    />
                                    {field_error("rate_per_night")}
                                </div>
                            </div>
                        }.into_any(),
                        _ => view! {
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="allowance_per_day">{"Uang Harian (Rp)"}</label>
                                    <input
                                        type="text"
                                        id="allowance_per_day"
                                        prop:value=move || form.get().booking.allowance_per_day
                                        on:input=move |ev| {
                                            form.update(|f| f.booking.allowance_per_day = event_target_value(&ev));
                                        }
                                        placeholder="0"
                                    />
                                    {field_error("allowance_per_day")}
                                </div>
                                <div class="form-group">
                                    <label for="days">{"Jumlah Hari"}</label>
                                    <input
                                        type="text"
                                        id="days"
                                        prop:value=move || form.get().booking.days
                                        on:input=move |ev| {
                                            form.update(|f| f.booking.days = event_target_value(&ev));
                                        }
                                        placeholder="1"
                                    />
                                    {field_error("days")}
                                </div>
                            </div>
                        }.into_any(),
                    }
                }}

                <div class="form-group form-group--total">
                    <label>{"Estimasi Biaya"}</label>
                    <span class="travel-total">{move || format_rupiah(cost_preview())}</span>
                </div>
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
