//! Application shell: sidebar + the active dashboard page.

use crate::domain::a101_payment_voucher::ui::list::PaymentVoucherList;
use crate::domain::a102_journal_entry::ui::list::JournalEntryList;
use crate::domain::a103_dose_record::ui::list::DoseRecordList;
use crate::domain::a104_equipment_check::ui::list::EquipmentCheckList;
use crate::domain::a105_travel_request::ui::list::TravelRequestList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Single source of truth for the page-key → view mapping.
fn render_page(key: &str) -> AnyView {
    match key {
        "a101_payment_voucher" => view! { <PaymentVoucherList /> }.into_any(),
        "a102_journal_entry" => view! { <JournalEntryList /> }.into_any(),
        "a103_dose_record" => view! { <DoseRecordList /> }.into_any(),
        "a104_equipment_check" => view! { <EquipmentCheckList /> }.into_any(),
        "a105_travel_request" => view! { <TravelRequestList /> }.into_any(),
        unknown => view! {
            <div class="content">
                <div class="error">{format!("Halaman tidak dikenal: {}", unknown)}</div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    // Each page owns its entity store, so switching pages
                    // reseeds the dashboard from its sample data.
                    {move || {
                        let key = ctx.active.get();
                        render_page(&key)
                    }}
                }
                .into_any()
            }
        />
    }
}
