//! Mapping tab.key → view. Every tab key openable from the sidebar (or the
//! URL) resolves here; unknown keys render a placeholder instead of failing.

use crate::dashboards::d100_overview::OverviewDashboard;
use crate::domain::a001_organization::ui::details::OrganizationDetails;
use crate::domain::a002_scrap_product::ui::list::ScrapProductList;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_purchase::ui::list::PurchaseList;
use crate::usecases::u101_register_account::RegisterAccountWizard;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d100_overview" => view! { <OverviewDashboard /> }.into_any(),
        "a001_organization" => view! { <OrganizationDetails /> }.into_any(),
        "a002_scrap_product" => view! { <ScrapProductList /> }.into_any(),
        "a003_order" => view! { <OrderList /> }.into_any(),
        "a004_purchase" => view! { <PurchaseList /> }.into_any(),
        "u101_register_account" => view! { <RegisterAccountWizard /> }.into_any(),
        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
