//! Sidebar with the dashboard menu, grouped per division.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Keuangan & Akuntansi",
            items: vec![
                ("a101_payment_voucher", "Persetujuan Pembayaran", "invoices"),
                ("a102_journal_entry", "Jurnal Umum", "book"),
            ],
        },
        MenuGroup {
            label: "QHSE",
            items: vec![
                ("a103_dose_record", "Dosis Personel", "activity"),
                ("a104_equipment_check", "Kalibrasi Alat", "gauge"),
            ],
        },
        MenuGroup {
            label: "HRD",
            items: vec![("a105_travel_request", "Perjalanan Dinas", "briefcase")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            {menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|(key, label, icon_name)| {
                                    view! {
                                        <button
                                            class="sidebar__item"
                                            class:sidebar__item--active=move || ctx.active.get() == key
                                            on:click=move |_| ctx.activate(key)
                                        >
                                            {icon(icon_name)}
                                            <span class="sidebar__item-label">{label}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
