pub mod global_context;
pub mod sidebar;
pub mod tabs;

use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
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
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <div class="app-topbar">
                <button
                    class="app-topbar__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| ctx.toggle_left()
                >
                    {crate::shared::icons::icon("menu")}
                </button>
                <span class="app-topbar__brand">"scrapdz"</span>
                <span class="app-topbar__tagline">"scrap & recycling marketplace"</span>
            </div>

            <div class="app-body">
                <div
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || !ctx.left_open.get()
                >
                    {left()}
                </div>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
