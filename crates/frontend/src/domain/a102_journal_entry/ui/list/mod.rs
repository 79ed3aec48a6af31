pub mod state;

use self::state::create_state;
use crate::domain::a102_journal_entry::ui::details::JournalDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::{BadgeTone, StatusBadge};
use crate::shared::date_utils::format_naive_date;
use crate::shared::format::format_rupiah;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a102_journal_entry::{
    sample_entries, JournalEntry, JournalEntryId, JournalStatus, ACCOUNTS,
};
use contracts::shared::crud::filter::{date_within, matches_choice, parse_date_input, text_contains};
use contracts::shared::crud::page::{paginate, PageRequest};
use contracts::shared::crud::store::{EntityStore, StoreRecord};
use leptos::prelude::*;
use state::JournalListState;
use std::cmp::Ordering;

impl Sortable for JournalEntry {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.base.code.cmp(&other.base.code),
            "entry_date" => self.entry_date.cmp(&other.entry_date),
            "description" => self
                .base
                .description
                .to_lowercase()
                .cmp(&other.base.description.to_lowercase()),
            "debit_total" => self
                .debit_total
                .partial_cmp(&other.debit_total)
                .unwrap_or(Ordering::Equal),
            "status" => self.status.label().cmp(other.status.label()),
            _ => Ordering::Equal,
        }
    }
}

fn matches_filter(entry: &JournalEntry, s: &JournalListState) -> bool {
    let search_hit = text_contains(&entry.base.code, &s.search)
        || text_contains(&entry.base.description, &s.search);
    // Account filter matches any line of the entry.
    let account_hit =
        s.account.is_empty() || entry.lines.iter().any(|l| matches_choice(&l.account, &s.account));
    search_hit
        && account_hit
        && matches_choice(entry.status.key(), &s.status)
        && date_within(
            entry.entry_date,
            parse_date_input(&s.date_from),
            parse_date_input(&s.date_to),
        )
}

fn status_tone(status: JournalStatus) -> BadgeTone {
    match status {
        JournalStatus::Balanced => BadgeTone::Success,
        JournalStatus::Unbalanced => BadgeTone::Warning,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn JournalEntryList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();
    let store = RwSignal::new(EntityStore::seeded(sample_entries()));
    let (error, set_error) = signal::<Option<String>>(None);

    let filtered = move || {
        let s = state.get();
        let mut rows: Vec<JournalEntry> = store
            .get()
            .iter()
            .filter(|e| matches_filter(e, &s))
            .cloned()
            .collect();
        sort_list(&mut rows, &s.sort_field, s.sort_ascending);
        rows
    };

    let slice = move || {
        let s = state.get();
        paginate(filtered().len(), PageRequest::new(s.page, s.page_size))
    };

    let visible = move || {
        let rows = filtered();
        let slice = paginate(
            rows.len(),
            PageRequest::new(state.get().page, state.get().page_size),
        );
        rows[slice.range()].to_vec()
    };

    let open_details_modal = move |id: Option<JournalEntryId>| {
        modal_stack.push_with_frame(
            Some("max-width: min(860px, 95vw); width: min(860px, 95vw);".to_string()),
            Some("journal-modal".to_string()),
            move |handle| {
                view! {
                    <JournalDetails
                        store=store
                        id=id
                        on_saved=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let open_delete_confirm = move |id: JournalEntryId| {
        let Some(label) = store.get_untracked().get(&id).map(|e| e.display_label()) else {
            set_error.set(Some("Jurnal tidak ditemukan".to_string()));
            return;
        };
        modal_stack.push(move |handle| {
            let message = format!("Hapus jurnal {}? Tindakan ini tidak dapat dibatalkan.", label);
            view! {
                <ConfirmDialog
                    title="Konfirmasi Hapus".to_string()
                    message=message
                    on_confirm=Callback::new({
                        let handle = handle.clone();
                        move |_| {
                            let mut st = store.get_untracked();
                            match st.delete(&id) {
                                Ok(_) => set_error.set(None),
                                Err(e) => set_error.set(Some(e.to_string())),
                            }
                            store.set(st);
                            handle.close();
                        }
                    })
                    on_cancel=Callback::new({
                        let handle = handle.clone();
                        move |_| handle.close()
                    })
                />
            }
            .into_any()
        });
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sortable_header = move |field: &'static str, label: &'static str| {
        view! {
            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort(field)>
                {label}
                <span class={move || get_sort_class(&state.get().sort_field, field)}>
                    {move || get_sort_indicator(&state.get().sort_field, field, state.get().sort_ascending)}
                </span>
            </th>
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Jurnal Umum"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Buat Jurnal"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| {
                        store.set(EntityStore::seeded(sample_entries()));
                        state.set(JournalListState::default());
                        set_error.set(None);
                    }>
                        {icon("refresh")}
                        {"Muat Ulang"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.get().search)
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| {
                            s.search = value;
                            s.page = 0;
                        });
                    })
                    placeholder="Cari nomor / memo..."
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            s.account = value;
                            s.page = 0;
                        });
                    }
                    prop:value=move || state.get().account
                >
                    <option value="">{"Semua Akun"}</option>
                    {ACCOUNTS.iter().map(|a| view! {
                        <option value={a.to_string()}>{a.to_string()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            s.status = value;
                            s.page = 0;
                        });
                    }
                    prop:value=move || state.get().status
                >
                    <option value="">{"Semua Status"}</option>
                    <option value="balanced">{"Seimbang"}</option>
                    <option value="unbalanced">{"Tidak Seimbang"}</option>
                </select>
                <input
                    type="date"
                    class="filter-date"
                    title="Dari tanggal"
                    prop:value=move || state.get().date_from
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            s.date_from = value;
                            s.page = 0;
                        });
                    }
                />
                <input
                    type="date"
                    class="filter-date"
                    title="Sampai tanggal"
                    prop:value=move || state.get().date_to
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            s.date_to = value;
                            s.page = 0;
                        });
                    }
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {sortable_header("code", "Nomor")}
                            {sortable_header("entry_date", "Tanggal")}
                            {sortable_header("description", "Memo")}
                            {sortable_header("debit_total", "Debit")}
                            <th class="table__header-cell">{"Kredit"}</th>
                            {sortable_header("status", "Status")}
                            <th class="table__header-cell">{"Aksi"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|entry| {
                            let id = entry.record_id();
                            let status = entry.status;
                            view! {
                                <tr class="table__row" on:click=move |_| open_details_modal(Some(id))>
                                    <td class="table__cell">{entry.base.code.clone()}</td>
                                    <td class="table__cell">{format_naive_date(entry.entry_date)}</td>
                                    <td class="table__cell">{entry.base.description.clone()}</td>
                                    <td class="table__cell table__cell--number">{format_rupiah(entry.debit_total)}</td>
                                    <td class="table__cell table__cell--number">{format_rupiah(entry.credit_total)}</td>
                                    <td class="table__cell">
                                        <StatusBadge label=status.label() tone=status_tone(status) />
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="icon-button"
                                            title="Ubah"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                open_details_modal(Some(id));
                                            }
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="icon-button icon-button--danger"
                                            title="Hapus"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                open_delete_confirm(id);
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || slice().page)
                total_pages=Signal::derive(move || slice().total_pages)
                showing_text=Signal::derive(move || slice().showing_text())
                page_size=Signal::derive(move || state.get().page_size)
                on_page_change=Callback::new(move |page| {
                    state.update(|s| s.page = page);
                })
                on_page_size_change=Callback::new(move |size| {
                    state.update(|s| {
                        s.page_size = size;
                        s.page = 0;
                    });
                })
            />
        </div>
    }
}
