//! Sidebar with collapsible menu groups.
//!
//! The Orders item carries a badge fed by the shared stats snapshot, so it
//! updates when any view publishes new counts.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::shared::stats_bridge::OrderStatsBridge;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "marketplace",
            label: "Marketplace",
            icon: "store",
            items: vec![
                ("a002_scrap_product", tab_label_for_key("a002_scrap_product"), "package"),
                ("a003_order", tab_label_for_key("a003_order"), "file-text"),
                ("a004_purchase", tab_label_for_key("a004_purchase"), "shopping-cart"),
            ],
        },
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![("d100_overview", tab_label_for_key("d100_overview"), "activity")],
        },
        MenuGroup {
            id: "account",
            label: "Account",
            icon: "settings",
            items: vec![
                ("a001_organization", tab_label_for_key("a001_organization"), "building"),
                ("u101_register_account", tab_label_for_key("u101_register_account"), "user-plus"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let bridge = use_context::<OrderStatsBridge>().expect("OrderStatsBridge not found");

    let expanded_groups = RwSignal::new(vec![
        "marketplace".to_string(),
        "dashboards".to_string(),
    ]);

    let badge_count = move || bridge.snapshot().get().sidebar_badge;

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                    let group_id = group.id.to_string();
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();
                    let gid_show = group_id.clone();
                    let items_stored = StoredValue::new(group.items.clone());

                    view! {
                        <div>
                            // Group header
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            // Children
                            <Show when=move || expanded_groups.get().contains(&gid_show)>
                                <div class="app-sidebar__children">
                                    {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                        let item_id = StoredValue::new(id.to_string());
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    let iid = item_id.get_value();
                                                    ctx.active.get().as_ref().map(|a| a == &iid).unwrap_or(false)
                                                }
                                                style:padding-left="10px"
                                                on:click=move |_| {
                                                    ctx.open_tab(id, label);
                                                }
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                    {(id == "a003_order").then(|| view! {
                                                        <Show when=move || { badge_count() > 0 }>
                                                            <span class="badge badge--primary">
                                                                {move || badge_count()}
                                                            </span>
                                                        </Show>
                                                    })}
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()}
        </div>
    }
}
