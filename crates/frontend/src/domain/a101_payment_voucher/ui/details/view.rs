use super::view_model::VoucherDetailsViewModel;
use crate::shared::format::format_rupiah;
use crate::shared::icons::icon;
use contracts::domain::a101_payment_voucher::{
    PaymentVoucher, VoucherId, VoucherLineDraft, DEPARTMENTS,
};
use contracts::shared::crud::store::EntityStore;
use leptos::prelude::*;

#[component]
pub fn VoucherDetails(
    store: RwSignal<EntityStore<PaymentVoucher>>,
    id: Option<VoucherId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = VoucherDetailsViewModel::new(store, id);
    let form = vm.form;
    let errors = vm.errors;
    let pending = vm.guard.pending;

    // Dismissing the modal by any route aborts an in-flight commit.
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

    // Memo: notifies only when a row is added or removed, so typing in a
    // line input does not rebuild the row under the cursor.
    let line_count = Memo::new(move |_| form.with(|f| f.lines.len()));

    let live_total = move || {
        let total: f64 = form
            .get()
            .lines
            .iter()
            .filter_map(|l| l.amount.trim().parse::<f64>().ok())
            .sum();
        format_rupiah(total)
    };

    let title = if vm.is_edit_mode() {
        format!("Ubah Voucher {}", vm.code_preview)
    } else {
        format!("Voucher Baru ({})", vm.code_preview)
    };

    let vm_save = vm.clone();

    view! {
        <div class="details-container voucher-details">
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
                        placeholder="Keperluan pembayaran"
                    />
                    {field_error("description")}
                </div>

                <div class="form-group">
                    <label for="payee">{"Dibayarkan Kepada"}</label>
                    <input
                        type="text"
                        id="payee"
                        prop:value=move || form.get().payee
                        on:input=move |ev| {
                            form.update(|f| f.payee = event_target_value(&ev));
                        }
                        placeholder="Nama penerima pembayaran"
                    />
                    {field_error("payee")}
                </div>

                <div class="form-row">
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

                    <div class="form-group">
                        <label for="voucher_date">{"Tanggal"}</label>
                        <input
                            type="date"
                            id="voucher_date"
                            prop:value=move || form.get().voucher_date
                            on:change=move |ev| {
                                form.update(|f| f.voucher_date = event_target_value(&ev));
                            }
                        />
                        {field_error("voucher_date")}
                    </div>
                </div>

                <div class="form-group">
                    <label>{"Rincian"}</label>
                    <table class="line-editor">
                        <thead>
                            <tr>
                                <th>{"Uraian"}</th>
                                <th>{"Jumlah (Rp)"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                (0..line_count.get()).map(|i| {
                                let line = form.with_untracked(|f| {
                                    f.lines.get(i).cloned().unwrap_or_default()
                                });
                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="text"
                                                prop:value=line.description.clone()
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    form.update(|f| {
                                                        if let Some(l) = f.lines.get_mut(i) {
                                                            l.description = value.clone();
                                                        }
                                                    });
                                                }
                                                placeholder="Uraian biaya"
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="text"
                                                class="line-editor__amount"
                                                prop:value=line.amount.clone()
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    form.update(|f| {
                                                        if let Some(l) = f.lines.get_mut(i) {
                                                            l.amount = value.clone();
                                                        }
                                                    });
                                                }
                                                placeholder="0"
                                            />
                                        </td>
                                        <td>
                                            <button
                                                class="icon-button icon-button--danger"
                                                title="Hapus baris"
                                                on:click=move |_| {
                                                    form.update(|f| {
                                                        if f.lines.len() > 1 {
                                                            f.lines.remove(i);
                                                        }
                                                    });
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                    <button
                        class="button button--secondary button--small"
                        on:click=move |_| {
                            form.update(|f| f.lines.push(VoucherLineDraft::default()));
                        }
                    >
                        {icon("plus")}
                        {"Tambah Baris"}
                    </button>
                    {field_error("lines")}
                </div>

                <div class="form-group form-group--total">
                    <label>{"Total"}</label>
                    <span class="voucher-total">{live_total}</span>
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
