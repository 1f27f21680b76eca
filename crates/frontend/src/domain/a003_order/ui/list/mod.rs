use crate::domain::a003_order::seed::seed_orders;
use crate::shared::components::{FilterPanel, PaginationControls, SearchInput, SortableHeaderCell};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListController, RowKey};
use crate::shared::stats_bridge::OrderStatsBridge;
use chrono::Utc;
use contracts::domain::a003_order::aggregate::{Order, OrderStatus};
use contracts::shared::data_view::{BucketSet, Queryable, Rankable, ALL_SENTINEL};
use contracts::shared::order_stats::OrderStats;
use leptos::prelude::*;
use std::cmp::Ordering;

const BUCKET_SETS: &[BucketSet] = &[];

#[derive(Clone, Debug, PartialEq)]
pub struct OrderHistoryEntry {
    pub status_label: &'static str,
    pub at: String,
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub id: String,
    pub code: String,
    pub product_name: String,
    pub counterparty: String,
    pub quantity_kg: f64,
    pub total_dzd: f64,
    pub status: OrderStatus,
    pub placed_at: String,
    pub active: bool,
    pub history: Vec<OrderHistoryEntry>,
}

impl From<&Order> for OrderRow {
    fn from(o: &Order) -> Self {
        Self {
            id: o.to_string_id(),
            code: o.base.code.clone(),
            product_name: o.product_name.clone(),
            counterparty: o.counterparty.clone(),
            quantity_kg: o.quantity_kg,
            total_dzd: o.total_dzd,
            status: o.status,
            placed_at: o
                .base
                .metadata
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            active: o.is_active(),
            history: o
                .history
                .iter()
                .map(|e| OrderHistoryEntry {
                    status_label: e.status.label(),
                    at: e.at.format("%Y-%m-%d %H:%M").to_string(),
                    note: e.note.clone(),
                })
                .collect(),
        }
    }
}

impl RowKey for OrderRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Queryable for OrderRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.product_name.clone(),
            self.counterparty.clone(),
        ]
    }

    fn choice_field(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }

    fn numeric_field(&self, field: &str) -> Option<f64> {
        match field {
            "total" => Some(self.total_dzd),
            _ => None,
        }
    }

    fn flag_field(&self, field: &str) -> Option<bool> {
        match field {
            "active" => Some(self.active),
            _ => None,
        }
    }
}

impl Rankable for OrderRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "placed_at" => self.placed_at.cmp(&other.placed_at),
            "total" => self
                .total_dzd
                .partial_cmp(&other.total_dzd)
                .unwrap_or(Ordering::Equal),
            "product" => self
                .product_name
                .to_lowercase()
                .cmp(&other.product_name.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for OrderRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Code",
            "Product",
            "Counterparty",
            "Quantity (kg)",
            "Total (DZD)",
            "Status",
            "Placed",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.product_name.clone(),
            self.counterparty.clone(),
            format!("{:.0}", self.quantity_kg),
            format!("{:.0}", self.total_dzd),
            self.status.label().to_string(),
            self.placed_at.clone(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    // The aggregate collection is authoritative; the controller's rows are
    // re-derived from it after every mutation.
    let orders = RwSignal::new(seed_orders());

    let initial_rows: Vec<OrderRow> =
        orders.with_untracked(|os| os.iter().map(OrderRow::from).collect());
    let controller = ListController::new(initial_rows, BUCKET_SETS, 10);

    let (error, set_error) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(true);

    let bridge = use_context::<OrderStatsBridge>().expect("OrderStatsBridge not found");

    // Keep rows in sync with the aggregates and publish fresh counts for
    // the sidebar badge and the dashboard.
    Effect::new(move |_| {
        let os = orders.get();
        controller.source.set(os.iter().map(OrderRow::from).collect());
        bridge.publish(OrderStats::from_orders(&os, Utc::now()));
    });

    let handle_cancel = move |id: String, code: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Cancel order {}?", code))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let mut failure: Option<String> = None;
        orders.update(|os| {
            if let Some(order) = os.iter_mut().find(|o| o.to_string_id() == id) {
                if let Err(e) = order.cancel(Utc::now()) {
                    failure = Some(e);
                }
            }
        });
        set_error.set(failure);
    };

    let cancel_selected = move || {
        let ids: Vec<String> = controller.selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Cancel the selected orders? Count: {}", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        orders.update(|os| {
            for id in &ids {
                if let Some(order) = os.iter_mut().find(|o| &o.to_string_id() == id) {
                    // Terminal orders slip through only via a stale selection.
                    let _ = order.cancel(Utc::now());
                }
            }
        });
        controller.clear_selection();
    };

    let handle_export = move || {
        let rows = controller.filtered().get();
        match export_to_csv(&rows, "orders.csv") {
            Ok(()) => set_error.set(None),
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Orders"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| handle_export()>
                        {icon("download")}
                        {"Export CSV"}
                    </button>
                    <button
                        class="button button--danger"
                        disabled=move || controller.selected.with(|s| s.is_empty())
                        on:click=move |_| cancel_selected()
                    >
                        {move || format!("Cancel selected ({})", controller.selected.with(|s| s.len()))}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <button class="warning-box__dismiss" on:click=move |_| set_error.set(None)>
                        {icon("x")}
                    </button>
                </div>
            })}

            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=Signal::derive(move || controller.filter.with(|f| f.active_count()))
                pagination_controls=move || view! {
                    <PaginationControls
                        current_page=Signal::derive(move || controller.page.get().page)
                        total_pages=Signal::derive(move || controller.page_count().get())
                        total_count=Signal::derive(move || controller.filtered().with(Vec::len))
                        page_size=Signal::derive(move || controller.page.get().page_size)
                        on_page_change=Callback::new(move |p| controller.set_page(p))
                        on_page_size_change=Callback::new(move |s| controller.set_page_size(s))
                    />
                }.into_any()
                filter_content=move || view! {
                    <div class="filter-panel__row">
                        <SearchInput
                            value=Signal::derive(move || controller.filter.with(|f| f.search.clone()))
                            on_change=Callback::new(move |text| controller.set_search(text))
                            placeholder="Search order, product, counterparty..."
                        />

                        <select
                            class="filter-select"
                            on:change=move |ev| controller.set_choice("status", &event_target_value(&ev))
                            prop:value=move || controller.filter.with(|f| {
                                f.choices.get("status").cloned().unwrap_or_else(|| ALL_SENTINEL.to_string())
                            })
                        >
                            <option value=ALL_SENTINEL>{"All statuses"}</option>
                            {OrderStatus::all().iter().map(|s| view! {
                                <option value=s.as_str()>{s.label()}</option>
                            }).collect_view()}
                        </select>

                        <label class="filter-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || controller.filter.with(|f| f.flags.get("active") == Some(&true))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    controller.set_flag("active", checked.then_some(true));
                                }
                            />
                            {"Active only"}
                        </label>

                        <button class="button button--secondary" on:click=move |_| controller.clear_filters()>
                            {"Clear all"}
                        </button>
                    </div>
                }.into_any()
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--icon"></th>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            <th class="table__header-cell">{"Code"}</th>
                            <SortableHeaderCell
                                label="Product"
                                sort_field="product"
                                sort=Signal::derive(move || controller.sort.get())
                                on_sort=Callback::new(move |f: String| controller.toggle_sort(&f))
                            />
                            <th class="table__header-cell">{"Counterparty"}</th>
                            <th class="table__header-cell">{"Quantity (kg)"}</th>
                            <SortableHeaderCell
                                label="Total (DZD)"
                                sort_field="total"
                                sort=Signal::derive(move || controller.sort.get())
                                on_sort=Callback::new(move |f: String| controller.toggle_sort(&f))
                                align="right"
                            />
                            <th class="table__header-cell">{"Status"}</th>
                            <SortableHeaderCell
                                label="Placed"
                                sort_field="placed_at"
                                sort=Signal::derive(move || controller.sort.get())
                                on_sort=Callback::new(move |f: String| controller.toggle_sort(&f))
                            />
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || controller.window().get().into_iter().map(|row| {
                            let id_for_expand = row.id.clone();
                            let id_for_expanded_check = row.id.clone();
                            let id_for_cancel = row.id.clone();
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            let code_for_cancel = row.code.clone();
                            let history = row.history.clone();
                            let is_expanded = Signal::derive(move || {
                                controller.expanded.with(|set| set.contains(&id_for_expanded_check))
                            });
                            let status_class = match row.status {
                                OrderStatus::Delivered => "status-chip status-chip--success",
                                OrderStatus::Cancelled => "status-chip status-chip--error",
                                _ => "status-chip",
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--icon">
                                        <button
                                            class="icon-button"
                                            title="Show history"
                                            on:click=move |e| {
                                                e.stop_propagation();
                                                controller.toggle_expanded(&id_for_expand);
                                            }
                                        >
                                            {move || icon(if is_expanded.get() { "chevron-down" } else { "chevron-right" })}
                                        </button>
                                    </td>
                                    <td class="table__cell table__cell--checkbox">
                                        {row.active.then(|| view! {
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                prop:checked=move || controller.selected.with(|s| s.contains(&id_for_checkbox))
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    controller.toggle_selected(&id_for_toggle, checked);
                                                }
                                                on:click=move |e| e.stop_propagation()
                                            />
                                        })}
                                    </td>
                                    <td class="table__cell">{row.code.clone()}</td>
                                    <td class="table__cell">{row.product_name.clone()}</td>
                                    <td class="table__cell">{row.counterparty.clone()}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.0}", row.quantity_kg)}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.0}", row.total_dzd)}</td>
                                    <td class="table__cell">
                                        <span class=status_class>{row.status.label()}</span>
                                    </td>
                                    <td class="table__cell">{row.placed_at.clone()}</td>
                                    <td class="table__cell">
                                        {row.active.then(|| view! {
                                            <button
                                                class="button button--danger button--small"
                                                on:click=move |e| {
                                                    e.stop_propagation();
                                                    handle_cancel(id_for_cancel.clone(), code_for_cancel.clone());
                                                }
                                            >
                                                {"Cancel"}
                                            </button>
                                        })}
                                    </td>
                                </tr>
                                <Show when=move || is_expanded.get()>
                                    <tr class="table__row table__row--detail">
                                        <td class="table__cell" colspan="10">
                                            <div class="order-history">
                                                {history.iter().map(|e| view! {
                                                    <div class="order-history__entry">
                                                        <span class="order-history__date">{e.at.clone()}</span>
                                                        <span class="order-history__status">{e.status_label}</span>
                                                        {e.note.clone().map(|n| view! {
                                                            <span class="order-history__note">{n}</span>
                                                        })}
                                                    </div>
                                                }).collect_view()}
                                            </div>
                                        </td>
                                    </tr>
                                </Show>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::data_view::{filter_records, FilterState};

    fn rows() -> Vec<OrderRow> {
        seed_orders().iter().map(OrderRow::from).collect()
    }

    #[test]
    fn test_active_flag_selects_open_orders() {
        let rows = rows();
        let mut state = FilterState::default();
        state.set_flag("active", Some(true));
        let out = filter_records(&rows, &state, BUCKET_SETS);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|r| !r.status.is_terminal()));
    }

    #[test]
    fn test_status_choice_is_exact() {
        let rows = rows();
        let mut state = FilterState::default();
        state.set_choice("status", "delivered");
        let out = filter_records(&rows, &state, BUCKET_SETS);
        assert!(out.iter().all(|r| r.status == OrderStatus::Delivered));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_row_carries_full_history() {
        let orders = seed_orders();
        let delivered = orders
            .iter()
            .find(|o| o.status == OrderStatus::Delivered)
            .unwrap();
        let row = OrderRow::from(delivered);
        assert_eq!(row.history.len(), delivered.history.len());
        assert_eq!(row.history.last().unwrap().status_label, "Delivered");
    }
}
