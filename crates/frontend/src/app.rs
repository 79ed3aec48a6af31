use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Provide the modal stack for editors, approval actions and confirmations.
    provide_context(ModalStackService::new());

    view! {
        <AppShell />
        <ModalHost />
    }
}
