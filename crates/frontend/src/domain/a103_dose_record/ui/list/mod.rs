pub mod state;

use self::state::create_state;
use crate::domain::a103_dose_record::ui::details::DoseDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::{BadgeTone, StatusBadge};
use crate::shared::date_utils::format_period;
use crate::shared::format::format_measure;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a103_dose_record::{sample_doses, DoseRecord, DoseStatus};
use contracts::shared::crud::filter::{matches_choice, text_contains};
use contracts::shared::crud::page::{paginate, PageRequest};
use contracts::shared::crud::store::{EntityStore, StoreRecord};
use leptos::prelude::*;
use state::DoseListState;
use std::cmp::Ordering;
use std::collections::BTreeSet;

impl Sortable for DoseRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "worker_name" => self
                .worker_name
                .to_lowercase()
                .cmp(&other.worker_name.to_lowercase()),
            "badge_no" => self.badge_no.cmp(&other.badge_no),
            "period" => self.period.cmp(&other.period),
            "dose_msv" => self
                .dose_msv
                .partial_cmp(&other.dose_msv)
                .unwrap_or(Ordering::Equal),
            "status" => self.status.label().cmp(other.status.label()),
            _ => Ordering::Equal,
        }
    }
}

fn matches_filter(record: &DoseRecord, s: &DoseListState) -> bool {
    let search_hit =
        text_contains(&record.worker_name, &s.search) || text_contains(&record.badge_no, &s.search);
    search_hit
        && matches_choice(&record.period, &s.period)
        && matches_choice(record.status.key(), &s.status)
}

fn status_tone(status: DoseStatus) -> BadgeTone {
    match status {
        DoseStatus::Normal => BadgeTone::Success,
        DoseStatus::Warning => BadgeTone::Warning,
        DoseStatus::Critical => BadgeTone::Danger,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DoseRecordList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();
    let store = RwSignal::new(EntityStore::seeded(sample_doses()));
    let (error, set_error) = signal::<Option<String>>(None);

    // Distinct monitoring periods currently in the store, newest first.
    let period_options = move || {
        let periods: BTreeSet<String> =
            store.get().iter().map(|r| r.period.clone()).collect();
        periods.into_iter().rev().collect::<Vec<String>>()
    };

    let filtered = move || {
        let s = state.get();
        let mut rows: Vec<DoseRecord> = store
            .get()
            .iter()
            .filter(|r| matches_filter(r, &s))
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

    let open_details_modal = move |id: Option<i64>| {
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            Some("dose-modal".to_string()),
            move |handle| {
                view! {
                    <DoseDetails
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

    let open_delete_confirm = move |id: i64| {
        let Some(label) = store.get_untracked().get(&id).map(|r| r.display_label()) else {
            set_error.set(Some("Data tidak ditemukan".to_string()));
            return;
        };
        modal_stack.push(move |handle| {
            let message = format!("Hapus data dosis {}?", label);
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
                <h2>{"Pemantauan Dosis Personel"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Catat Dosis"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| {
                        store.set(EntityStore::seeded(sample_doses()));
                        state.set(DoseListState::default());
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
                    placeholder="Cari pekerja / badge..."
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            s.period = value;
                            s.page = 0;
                        });
                    }
                    prop:value=move || state.get().period
                >
                    <option value="">{"Semua Periode"}</option>
                    {move || period_options().into_iter().map(|p| view! {
                        <option value={p.clone()}>{format_period(&p)}</option>
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
                    <option value="normal">{"Normal"}</option>
                    <option value="warning">{"Waspada"}</option>
                    <option value="critical">{"Kritis"}</option>
                </select>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {sortable_header("worker_name", "Pekerja")}
                            {sortable_header("badge_no", "Badge")}
                            {sortable_header("period", "Periode")}
                            {sortable_header("dose_msv", "Dosis (mSv)")}
                            <th class="table__header-cell">{"Batas (mSv)"}</th>
                            {sortable_header("status", "Status")}
                            <th class="table__header-cell">{"Aksi"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|record| {
                            let id = record.record_id();
                            let status = record.status;
                            view! {
                                <tr class="table__row" on:click=move |_| open_details_modal(Some(id))>
                                    <td class="table__cell">{record.worker_name.clone()}</td>
                                    <td class="table__cell">{record.badge_no.clone()}</td>
                                    <td class="table__cell">{format_period(&record.period)}</td>
                                    <td class="table__cell table__cell--number">{format_measure(record.dose_msv)}</td>
                                    <td class="table__cell table__cell--number">{format_measure(record.limit_msv)}</td>
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
