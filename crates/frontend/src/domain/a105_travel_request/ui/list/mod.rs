pub mod state;

use self::state::create_state;
use crate::domain::a105_travel_request::ui::details::TravelDetails;
use crate::shared::components::approval_modal::ApprovalActionModal;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::{approval_tone, StatusBadge};
use crate::shared::date_utils::format_naive_date;
use crate::shared::format::format_rupiah;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a105_travel_request::{
    sample_requests, TravelRequest, TravelRequestId, DEPARTMENTS,
};
use contracts::shared::crud::filter::{date_within, matches_choice, parse_date_input, text_contains};
use contracts::shared::crud::lifecycle::Decision;
use contracts::shared::crud::page::{paginate, PageRequest};
use contracts::shared::crud::store::{EntityStore, StoreRecord};
use leptos::prelude::*;
use state::TravelListState;
use std::cmp::Ordering;

impl Sortable for TravelRequest {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.base.code.cmp(&other.base.code),
            "start_date" => self.start_date.cmp(&other.start_date),
            "requester" => self
                .requester
                .to_lowercase()
                .cmp(&other.requester.to_lowercase()),
            "department" => self.department.cmp(&other.department),
            "estimated_cost" => self
                .estimated_cost
                .partial_cmp(&other.estimated_cost)
                .unwrap_or(Ordering::Equal),
            "status" => self
                .approval
                .status
                .label()
                .cmp(other.approval.status.label()),
            _ => Ordering::Equal,
        }
    }
}

/// The date-range filter keeps a request whose travel window overlaps
/// the requested bounds (inclusive).
fn matches_filter(request: &TravelRequest, s: &TravelListState) -> bool {
    let search_hit = text_contains(&request.base.code, &s.search)
        || text_contains(&request.requester, &s.search)
        || text_contains(&request.base.description, &s.search);
    search_hit
        && matches_choice(&request.department, &s.department)
        && matches_choice(request.approval.status.key(), &s.status)
        && (date_within(
            request.start_date,
            parse_date_input(&s.date_from),
            parse_date_input(&s.date_to),
        ) || date_within(
            request.end_date,
            parse_date_input(&s.date_from),
            parse_date_input(&s.date_to),
        ))
}

fn submit_request(st: &mut EntityStore<TravelRequest>, id: TravelRequestId) -> Result<(), String> {
    let mut request = st
        .get(&id)
        .cloned()
        .ok_or_else(|| "Dokumen tidak ditemukan".to_string())?;
    request.submit().map_err(|e| e.to_string())?;
    st.update(request).map_err(|e| e.to_string())
}

fn decide_request(
    st: &mut EntityStore<TravelRequest>,
    id: TravelRequestId,
    decision: Decision,
    keterangan: &str,
) -> Result<(), String> {
    let mut request = st
        .get(&id)
        .cloned()
        .ok_or_else(|| "Dokumen tidak ditemukan".to_string())?;
    request.decide(decision, keterangan).map_err(|e| e.to_string())?;
    st.update(request).map_err(|e| e.to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn TravelRequestList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();
    let store = RwSignal::new(EntityStore::seeded(sample_requests()));
    let (error, set_error) = signal::<Option<String>>(None);

    let apply = move |result: Result<(), String>| match result {
        Ok(()) => set_error.set(None),
        Err(e) => set_error.set(Some(e)),
    };

    let filtered = move || {
        let s = state.get();
        let mut rows: Vec<TravelRequest> = store
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

    let open_details_modal = move |id: Option<TravelRequestId>| {
        modal_stack.push_with_frame(
            Some("max-width: min(860px, 95vw); width: min(860px, 95vw);".to_string()),
            Some("travel-modal".to_string()),
            move |handle| {
                view! {
                    <TravelDetails
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

    let open_approval_modal = move |id: TravelRequestId, decision: Decision| {
        let Some(code) = store.get_untracked().get(&id).map(|r| r.base.code.clone()) else {
            set_error.set(Some("Dokumen tidak ditemukan".to_string()));
            return;
        };
        modal_stack.push(move |handle| {
            let code = code.clone();
            view! {
                <ApprovalActionModal
                    code=code
                    decision=decision
                    on_confirm=Callback::new({
                        let handle = handle.clone();
                        move |keterangan: String| {
                            let mut st = store.get_untracked();
                            apply(decide_request(&mut st, id, decision, &keterangan));
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

    let open_delete_confirm = move |id: TravelRequestId| {
        let Some(label) = store.get_untracked().get(&id).map(|r| r.display_label()) else {
            set_error.set(Some("Dokumen tidak ditemukan".to_string()));
            return;
        };
        modal_stack.push(move |handle| {
            let message = format!("Hapus dokumen {}? Tindakan ini tidak dapat dibatalkan.", label);
            view! {
                <ConfirmDialog
                    title="Konfirmasi Hapus".to_string()
                    message=message
                    on_confirm=Callback::new({
                        let handle = handle.clone();
                        move |_| {
                            let mut st = store.get_untracked();
                            apply(st.delete(&id).map(|_| ()).map_err(|e| e.to_string()));
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

    let handle_submit = move |id: TravelRequestId| {
        let mut st = store.get_untracked();
        apply(submit_request(&mut st, id));
        store.set(st);
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
                <h2>{"Perjalanan Dinas"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Buat Pengajuan"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| {
                        store.set(EntityStore::seeded(sample_requests()));
                        state.set(TravelListState::default());
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
                    placeholder="Cari kode / pemohon / keperluan..."
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            s.department = value;
                            s.page = 0;
                        });
                    }
                    prop:value=move || state.get().department
                >
                    <option value="">{"Semua Departemen"}</option>
                    {DEPARTMENTS.iter().map(|d| view! {
                        <option value={d.to_string()}>{d.to_string()}</option>
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
                    <option value="draft">{"Draft"}</option>
                    <option value="pending">{"Menunggu Persetujuan"}</option>
                    <option value="approved">{"Disetujui"}</option>
                    <option value="rejected">{"Ditolak"}</option>
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
                            {sortable_header("code", "Kode")}
                            {sortable_header("start_date", "Berangkat")}
                            {sortable_header("requester", "Pemohon")}
                            {sortable_header("department", "Departemen")}
                            <th class="table__header-cell">{"Pemesanan"}</th>
                            {sortable_header("estimated_cost", "Estimasi Biaya")}
                            {sortable_header("status", "Status")}
                            <th class="table__header-cell">{"Aksi"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|request| {
                            let id = request.record_id();
                            let status = request.approval.status;
                            let keterangan = request.approval.keterangan.clone();
                            let participants = request.participants.len();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{request.base.code.clone()}</td>
                                    <td class="table__cell">
                                        {format!(
                                            "{} – {}",
                                            format_naive_date(request.start_date),
                                            format_naive_date(request.end_date)
                                        )}
                                    </td>
                                    <td class="table__cell">
                                        {request.requester.clone()}
                                        <div class="table__cell-note">{format!("{} peserta", participants)}</div>
                                    </td>
                                    <td class="table__cell">{request.department.clone()}</td>
                                    <td class="table__cell">{request.booking.label()}</td>
                                    <td class="table__cell table__cell--number">{format_rupiah(request.estimated_cost)}</td>
                                    <td class="table__cell">
                                        <StatusBadge label=status.label() tone=approval_tone(status) />
                                        {keterangan.map(|k| view! {
                                            <div class="table__cell-note" title="Keterangan">{k}</div>
                                        })}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        {status.can_submit().then(|| view! {
                                            <button class="icon-button" title="Ubah" on:click=move |_| open_details_modal(Some(id))>
                                                {icon("edit")}
                                            </button>
                                            <button class="icon-button" title="Ajukan persetujuan" on:click=move |_| handle_submit(id)>
                                                {icon("send")}
                                            </button>
                                        })}
                                        {status.can_decide().then(|| view! {
                                            <button class="icon-button icon-button--success" title="Setujui" on:click=move |_| open_approval_modal(id, Decision::Approve)>
                                                {icon("check")}
                                            </button>
                                            <button class="icon-button icon-button--danger" title="Tolak" on:click=move |_| open_approval_modal(id, Decision::Reject)>
                                                {icon("x")}
                                            </button>
                                        })}
                                        {(!status.can_decide()).then(|| view! {
                                            <button class="icon-button icon-button--danger" title="Hapus" on:click=move |_| open_delete_confirm(id)>
                                                {icon("delete")}
                                            </button>
                                        })}
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
