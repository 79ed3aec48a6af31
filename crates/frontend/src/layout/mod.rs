pub mod global_context;
pub mod sidebar;

use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// |   (Left)  |        (Center)              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button
                    class="top-header__toggle"
                    on:click=move |_| ctx.toggle_left()
                    title="Tampilkan/sembunyikan menu"
                >
                    {crate::shared::icons::icon("menu")}
                </button>
                <span class="top-header__title">{"Dasbor Internal"}</span>
            </header>

            <div class="app-body">
                <aside
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || !ctx.left_open.get()
                >
                    {left()}
                </aside>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
