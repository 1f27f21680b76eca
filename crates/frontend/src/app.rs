use crate::layout::global_context::AppGlobalContext;
use crate::layout::sidebar::Sidebar;
use crate::layout::tabs::Tabs;
use crate::layout::Shell;
use crate::shared::stats_bridge::OrderStatsBridge;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // One bridge instance per document; every consumer gets it injected
    // through context instead of reaching for a global.
    provide_context(OrderStatsBridge::new());

    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    ctx.init_router_integration();

    // Land on the overview when the URL does not name a tab.
    if ctx.active.get_untracked().is_none() {
        ctx.open_tab(
            "d100_overview",
            crate::layout::tabs::tab_label_for_key("d100_overview"),
        );
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}
