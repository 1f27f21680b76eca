use crate::domain::a004_purchase::seed::seed_purchases;
use crate::shared::components::{FilterPanel, PaginationControls, SearchInput, SortableHeaderCell};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListController, RowKey};
use contracts::domain::a004_purchase::aggregate::{Purchase, PurchaseStatus};
use contracts::shared::data_view::{Bucket, BucketSet, Queryable, Rankable, ALL_SENTINEL};
use leptos::prelude::*;
use std::cmp::Ordering;

/// Deal-price buckets (DZD) offered by the price filter.
pub const PRICE_BUCKETS: BucketSet = BucketSet {
    field: "price",
    buckets: &[
        Bucket { key: "under-10k", label: "Under 10 000", min: None, max: Some(10_000.0) },
        Bucket { key: "10k-20k", label: "10 000 – 20 000", min: Some(10_000.0), max: Some(20_000.0) },
        Bucket { key: "over-20k", label: "Over 20 000", min: Some(20_000.0), max: None },
    ],
};

const BUCKET_SETS: &[BucketSet] = &[PRICE_BUCKETS];

#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseRow {
    pub id: String,
    pub code: String,
    pub product_name: String,
    pub seller_name: String,
    pub price_dzd: f64,
    pub status: PurchaseStatus,
    pub purchased_at: String,
}

impl From<Purchase> for PurchaseRow {
    fn from(p: Purchase) -> Self {
        Self {
            id: p.to_string_id(),
            code: p.base.code.clone(),
            product_name: p.product_name.clone(),
            seller_name: p.seller_name.clone(),
            price_dzd: p.price_dzd,
            status: p.status,
            purchased_at: p.purchased_at.format("%Y-%m-%d").to_string(),
        }
    }
}

impl RowKey for PurchaseRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Queryable for PurchaseRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.product_name.clone(),
            self.seller_name.clone(),
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
            "price" => Some(self.price_dzd),
            _ => None,
        }
    }

    fn flag_field(&self, _field: &str) -> Option<bool> {
        None
    }
}

impl Rankable for PurchaseRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "price" => self
                .price_dzd
                .partial_cmp(&other.price_dzd)
                .unwrap_or(Ordering::Equal),
            "purchased_at" => self.purchased_at.cmp(&other.purchased_at),
            "product" => self
                .product_name
                .to_lowercase()
                .cmp(&other.product_name.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for PurchaseRow {
    fn headers() -> Vec<&'static str> {
        vec!["Code", "Product", "Seller", "Price (DZD)", "Status", "Date"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.product_name.clone(),
            self.seller_name.clone(),
            format!("{:.0}", self.price_dzd),
            self.status.label().to_string(),
            self.purchased_at.clone(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PurchaseList() -> impl IntoView {
    let rows: Vec<PurchaseRow> = seed_purchases().into_iter().map(Into::into).collect();
    let controller = ListController::new(rows, BUCKET_SETS, 5);

    let (error, set_error) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(true);

    let handle_export = move || {
        let rows = controller.filtered().get();
        match export_to_csv(&rows, "purchase_history.csv") {
            Ok(()) => set_error.set(None),
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Purchase history"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| handle_export()>
                        {icon("download")}
                        {"Export CSV"}
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
                            placeholder="Search product, seller..."
                        />

                        <select
                            class="filter-select"
                            on:change=move |ev| controller.set_choice("status", &event_target_value(&ev))
                            prop:value=move || controller.filter.with(|f| {
                                f.choices.get("status").cloned().unwrap_or_else(|| ALL_SENTINEL.to_string())
                            })
                        >
                            <option value=ALL_SENTINEL>{"All statuses"}</option>
                            {PurchaseStatus::all().iter().map(|s| view! {
                                <option value=s.as_str()>{s.label()}</option>
                            }).collect_view()}
                        </select>

                        <select
                            class="filter-select"
                            on:change=move |ev| controller.set_bucket("price", &event_target_value(&ev))
                            prop:value=move || controller.filter.with(|f| {
                                f.buckets.get("price").cloned().unwrap_or_else(|| ALL_SENTINEL.to_string())
                            })
                        >
                            <option value=ALL_SENTINEL>{"Any price"}</option>
                            {PRICE_BUCKETS.buckets.iter().map(|b| view! {
                                <option value=b.key>{b.label}</option>
                            }).collect_view()}
                        </select>

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
                            <th class="table__header-cell">{"Code"}</th>
                            <SortableHeaderCell
                                label="Product"
                                sort_field="product"
                                sort=Signal::derive(move || controller.sort.get())
                                on_sort=Callback::new(move |f: String| controller.toggle_sort(&f))
                            />
                            <th class="table__header-cell">{"Seller"}</th>
                            <SortableHeaderCell
                                label="Price (DZD)"
                                sort_field="price"
                                sort=Signal::derive(move || controller.sort.get())
                                on_sort=Callback::new(move |f: String| controller.toggle_sort(&f))
                                align="right"
                            />
                            <th class="table__header-cell">{"Status"}</th>
                            <SortableHeaderCell
                                label="Date"
                                sort_field="purchased_at"
                                sort=Signal::derive(move || controller.sort.get())
                                on_sort=Callback::new(move |f: String| controller.toggle_sort(&f))
                            />
                        </tr>
                    </thead>
                    <tbody>
                        {move || controller.window().get().into_iter().map(|row| {
                            let status_class = match row.status {
                                PurchaseStatus::Buyed => "status-chip status-chip--success",
                                PurchaseStatus::Refused => "status-chip status-chip--error",
                                PurchaseStatus::Pending => "status-chip",
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.product_name}</td>
                                    <td class="table__cell">{row.seller_name}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.0}", row.price_dzd)}</td>
                                    <td class="table__cell">
                                        <span class=status_class>{row.status.label()}</span>
                                    </td>
                                    <td class="table__cell">{row.purchased_at}</td>
                                </tr>
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
    use contracts::shared::data_view::{
        filter_records, sort_records, FilterState, SortDirection, SortState,
    };

    fn rows() -> Vec<PurchaseRow> {
        seed_purchases().into_iter().map(Into::into).collect()
    }

    #[test]
    fn test_buyed_filter_keeps_codes_one_three_five_in_order() {
        let rows = rows();
        let mut state = FilterState::default();
        state.set_choice("status", "buyed");
        let out = filter_records(&rows, &state, BUCKET_SETS);
        let codes: Vec<&str> = out.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_price_sort_ascending_over_seed() {
        let sort = SortState {
            field: Some("price".into()),
            direction: SortDirection::Ascending,
        };
        let sorted = sort_records(rows(), &sort);
        let prices: Vec<f64> = sorted.iter().map(|r| r.price_dzd).collect();
        assert_eq!(
            prices,
            vec![5_000.0, 8_000.0, 10_000.0, 12_000.0, 15_000.0, 18_000.0, 25_000.0, 30_000.0]
        );
    }

    #[test]
    fn test_bucket_filter_uses_inclusive_lower_bound() {
        let rows = rows();
        let mut state = FilterState::default();
        assert!(state.set_bucket(&PRICE_BUCKETS, "10k-20k"));
        let out = filter_records(&rows, &state, BUCKET_SETS);
        let mut codes: Vec<&str> = out.iter().map(|r| r.code.as_str()).collect();
        codes.sort();
        // 10 000 is inside, 20 000 would not be; seed holds 10k, 15k, 12k, 18k
        assert_eq!(codes, vec!["1", "2", "6", "8"]);
    }
}
