use super::view_model::JournalDetailsViewModel;
use crate::shared::format::format_rupiah;
use crate::shared::icons::icon;
use contracts::domain::a102_journal_entry::{
    JournalEntry, JournalEntryId, JournalLineDraft, ACCOUNTS,
};
use contracts::shared::crud::store::EntityStore;
use leptos::prelude::*;

#[component]
pub fn JournalDetails(
    store: RwSignal<EntityStore<JournalEntry>>,
    id: Option<JournalEntryId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = JournalDetailsViewModel::new(store, id);
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

    // Memo: notifies only when a row is added or removed, so typing in a
    // line input does not rebuild the row under the cursor.
    let line_count = Memo::new(move |_| form.with(|f| f.lines.len()));

    // Live totals so an unbalanced draft is visible before saving.
    let live_totals = move || {
        let f = form.get();
        let mut debit = 0.0_f64;
        let mut credit = 0.0_f64;
        for line in &f.lines {
            let amount = line.amount.trim().parse::<f64>().unwrap_or(0.0);
            if line.side == "credit" {
                credit += amount;
            } else {
                debit += amount;
            }
        }
        (debit, credit)
    };

    let title = if vm.is_edit_mode() {
        format!("Ubah Jurnal {}", vm.code_preview)
    } else {
        format!("Jurnal Baru ({})", vm.code_preview)
    };

    let vm_save = vm.clone();

    view! {
        <div class="details-container journal-details">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            {move || errors.get().get("store").map(|e| view! { <div class="error">{e.to_string()}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="memo">{"Memo"}</label>
                        <input
                            type="text"
                            id="memo"
                            prop:value=move || form.get().description
                            on:input=move |ev| {
                                form.update(|f| f.description = event_target_value(&ev));
                            }
                            placeholder="Uraian transaksi"
                        />
                        {field_error("description")}
                    </div>

                    <div class="form-group">
                        <label for="entry_date">{"Tanggal"}</label>
                        <input
                            type="date"
                            id="entry_date"
                            prop:value=move || form.get().entry_date
                            on:change=move |ev| {
                                form.update(|f| f.entry_date = event_target_value(&ev));
                            }
                        />
                        {field_error("entry_date")}
                    </div>
                </div>

                <div class="form-group">
                    <label>{"Baris Jurnal"}</label>
                    <table class="line-editor">
                        <thead>
                            <tr>
                                <th>{"Akun"}</th>
                                <th>{"Posisi"}</th>
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
                                            <select
                                                prop:value=line.account.clone()
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    form.update(|f| {
                                                        if let Some(l) = f.lines.get_mut(i) {
                                                            l.account = value.clone();
                                                        }
                                                    });
                                                }
                                            >
                                                <option value="">{"Pilih akun"}</option>
                                                {ACCOUNTS.iter().map(|a| view! {
                                                    <option value={a.to_string()}>{a.to_string()}</option>
                                                }).collect_view()}
                                            </select>
                                        </td>
                                        <td>
                                            <select
                                                prop:value=line.side.clone()
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    form.update(|f| {
                                                        if let Some(l) = f.lines.get_mut(i) {
                                                            l.side = value.clone();
                                                        }
                                                    });
                                                }
                                            >
                                                <option value="debit">{"Debit"}</option>
                                                <option value="credit">{"Kredit"}</option>
                                            </select>
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
                                                        if f.lines.len() > 2 {
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
                            form.update(|f| f.lines.push(JournalLineDraft::default()));
                        }
                    >
                        {icon("plus")}
                        {"Tambah Baris"}
                    </button>
                    {field_error("lines")}
                </div>

                <div class="form-group form-group--total">
                    <span class="journal-totals">
                        {move || {
                            let (debit, credit) = live_totals();
                            format!("Debit {} · Kredit {}", format_rupiah(debit), format_rupiah(credit))
                        }}
                    </span>
                    {move || {
                        let (debit, credit) = live_totals();
                        if (debit - credit).abs() >= 0.005 {
                            Some(view! {
                                <div class="field-error">
                                    {format!("Selisih {}", format_rupiah(debit - credit))}
                                </div>
                            })
                        } else {
                            None
                        }
                    }}
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
