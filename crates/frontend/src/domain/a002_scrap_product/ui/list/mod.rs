use crate::domain::a002_scrap_product::seed::seed_products;
use crate::shared::components::{
    FilterPanel, FilterTag, PaginationControls, SearchInput, SortableHeaderCell,
};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListController, RowKey};
use contracts::domain::a002_scrap_product::aggregate::{ScrapCategory, ScrapProduct};
use contracts::shared::data_view::{Bucket, BucketSet, Queryable, Rankable, ALL_SENTINEL};
use contracts::shared::geo;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Asking-price buckets (DZD per ton) offered by the price filter.
/// Orthogonal to the price sort: both can be active at once.
pub const PRICE_BUCKETS: BucketSet = BucketSet {
    field: "price",
    buckets: &[
        Bucket { key: "under-50k", label: "Under 50 000", min: None, max: Some(50_000.0) },
        Bucket { key: "50k-150k", label: "50 000 – 150 000", min: Some(50_000.0), max: Some(150_000.0) },
        Bucket { key: "over-150k", label: "Over 150 000", min: Some(150_000.0), max: None },
    ],
};

const BUCKET_SETS: &[BucketSet] = &[PRICE_BUCKETS];

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapProductRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: ScrapCategory,
    pub price_dzd: f64,
    pub unit: String,
    pub quantity_kg: f64,
    pub wilaya: String,
    pub seller_name: String,
    pub available: bool,
    pub is_favorite: bool,
    pub listed_at: String,
}

impl From<ScrapProduct> for ScrapProductRow {
    fn from(p: ScrapProduct) -> Self {
        Self {
            id: p.to_string_id(),
            code: p.base.code.clone(),
            name: p.base.description.clone(),
            category: p.category,
            price_dzd: p.price_dzd,
            unit: p.unit.clone(),
            quantity_kg: p.quantity_kg,
            wilaya: p.wilaya.clone(),
            seller_name: p.seller_name.clone(),
            available: p.available,
            is_favorite: p.is_favorite,
            listed_at: p.base.metadata.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

impl RowKey for ScrapProductRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl Queryable for ScrapProductRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.seller_name.clone(),
            self.wilaya.clone(),
        ]
    }

    fn choice_field(&self, field: &str) -> Option<String> {
        match field {
            "category" => Some(self.category.as_str().to_string()),
            "wilaya" => Some(self.wilaya.clone()),
            _ => None,
        }
    }

    fn numeric_field(&self, field: &str) -> Option<f64> {
        match field {
            "price" => Some(self.price_dzd),
            "quantity" => Some(self.quantity_kg),
            _ => None,
        }
    }

    fn flag_field(&self, field: &str) -> Option<bool> {
        match field {
            "favorite" => Some(self.is_favorite),
            "available" => Some(self.available),
            _ => None,
        }
    }
}

impl Rankable for ScrapProductRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "price" => self
                .price_dzd
                .partial_cmp(&other.price_dzd)
                .unwrap_or(Ordering::Equal),
            "quantity" => self
                .quantity_kg
                .partial_cmp(&other.quantity_kg)
                .unwrap_or(Ordering::Equal),
            "listed_at" => self.listed_at.cmp(&other.listed_at),
            "seller" => self
                .seller_name
                .to_lowercase()
                .cmp(&other.seller_name.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for ScrapProductRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Code",
            "Product",
            "Category",
            "Price (DZD)",
            "Unit",
            "Quantity (kg)",
            "Wilaya",
            "Seller",
            "Available",
            "Favorite",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.category.label().to_string(),
            format!("{:.0}", self.price_dzd),
            self.unit.clone(),
            format!("{:.0}", self.quantity_kg),
            self.wilaya.clone(),
            self.seller_name.clone(),
            if self.available { "Yes" } else { "No" }.to_string(),
            if self.is_favorite { "Yes" } else { "No" }.to_string(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ScrapProductList() -> impl IntoView {
    let rows: Vec<ScrapProductRow> = seed_products().into_iter().map(Into::into).collect();
    let controller = ListController::new(rows, BUCKET_SETS, 10);

    let (error, set_error) = signal::<Option<String>>(None);
    let filters_expanded = RwSignal::new(true);

    let toggle_favorite = move |id: String| {
        controller.mutate(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                row.is_favorite = !row.is_favorite;
            }
        });
    };

    let handle_export = move || {
        let rows = controller.filtered().get();
        match export_to_csv(&rows, "scrap_products.csv") {
            Ok(()) => set_error.set(None),
            Err(e) => set_error.set(Some(e)),
        }
    };

    let category_label = |key: &str| {
        ScrapCategory::all()
            .iter()
            .find(|c| c.as_str() == key)
            .map(|c| c.label())
            .unwrap_or("?")
            .to_string()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Scrap products"}</h1>
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
                            placeholder="Search product, seller, wilaya..."
                        />

                        <select
                            class="filter-select"
                            on:change=move |ev| controller.set_choice("category", &event_target_value(&ev))
                            prop:value=move || controller.filter.with(|f| {
                                f.choices.get("category").cloned().unwrap_or_else(|| ALL_SENTINEL.to_string())
                            })
                        >
                            <option value=ALL_SENTINEL>{"All categories"}</option>
                            {ScrapCategory::all().iter().map(|cat| view! {
                                <option value=cat.as_str()>{cat.label()}</option>
                            }).collect_view()}
                        </select>

                        <select
                            class="filter-select"
                            on:change=move |ev| controller.set_choice("wilaya", &event_target_value(&ev))
                            prop:value=move || controller.filter.with(|f| {
                                f.choices.get("wilaya").cloned().unwrap_or_else(|| ALL_SENTINEL.to_string())
                            })
                        >
                            <option value=ALL_SENTINEL>{"All wilayas"}</option>
                            {geo::wilaya_names().into_iter().map(|name| view! {
                                <option value=name>{name}</option>
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

                        <label class="filter-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || controller.filter.with(|f| f.flags.get("favorite") == Some(&true))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    controller.set_flag("favorite", checked.then_some(true));
                                }
                            />
                            {"Favorites only"}
                        </label>

                        <label class="filter-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || controller.filter.with(|f| f.flags.get("available") == Some(&true))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    controller.set_flag("available", checked.then_some(true));
                                }
                            />
                            {"Available only"}
                        </label>

                        <button class="button button--secondary" on:click=move |_| controller.clear_filters()>
                            {"Clear all"}
                        </button>
                    </div>
                }.into_any()
                filter_tags=move || view! {
                    <div class="filter-tags">
                        {move || {
                            let mut tags: Vec<AnyView> = Vec::new();
                            let state = controller.filter.get();
                            if !state.search.trim().is_empty() {
                                let label = format!("Search: {}", state.search.trim());
                                tags.push(view! {
                                    <FilterTag
                                        label=label
                                        on_remove=Callback::new(move |_| controller.set_search(String::new()))
                                    />
                                }.into_any());
                            }
                            if let Some(cat) = state.choices.get("category") {
                                let label = format!("Category: {}", category_label(cat));
                                tags.push(view! {
                                    <FilterTag
                                        label=label
                                        on_remove=Callback::new(move |_| controller.set_choice("category", ALL_SENTINEL))
                                    />
                                }.into_any());
                            }
                            if let Some(wilaya) = state.choices.get("wilaya") {
                                let label = format!("Wilaya: {}", wilaya);
                                tags.push(view! {
                                    <FilterTag
                                        label=label
                                        on_remove=Callback::new(move |_| controller.set_choice("wilaya", ALL_SENTINEL))
                                    />
                                }.into_any());
                            }
                            if let Some(key) = state.buckets.get("price") {
                                let label = format!(
                                    "Price: {}",
                                    PRICE_BUCKETS.get(key).map(|b| b.label).unwrap_or(key.as_str())
                                );
                                tags.push(view! {
                                    <FilterTag
                                        label=label
                                        on_remove=Callback::new(move |_| controller.set_bucket("price", ALL_SENTINEL))
                                    />
                                }.into_any());
                            }
                            tags
                        }}
                    </div>
                }.into_any()
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--icon"></th>
                            <th class="table__header-cell">{"Code"}</th>
                            <SortableHeaderCell
                                label="Product"
                                sort_field="name"
                                sort=Signal::derive(move || controller.sort.get())
                                on_sort=Callback::new(move |f: String| controller.toggle_sort(&f))
                            />
                            <th class="table__header-cell">{"Category"}</th>
                            <SortableHeaderCell
                                label="Price (DZD/ton)"
                                sort_field="price"
                                sort=Signal::derive(move || controller.sort.get())
                                on_sort=Callback::new(move |f: String| controller.toggle_sort(&f))
                                align="right"
                            />
                            <SortableHeaderCell
                                label="Quantity (kg)"
                                sort_field="quantity"
                                sort=Signal::derive(move || controller.sort.get())
                                on_sort=Callback::new(move |f: String| controller.toggle_sort(&f))
                                align="right"
                            />
                            <th class="table__header-cell">{"Wilaya"}</th>
                            <SortableHeaderCell
                                label="Seller"
                                sort_field="seller"
                                sort=Signal::derive(move || controller.sort.get())
                                on_sort=Callback::new(move |f: String| controller.toggle_sort(&f))
                            />
                            <SortableHeaderCell
                                label="Listed"
                                sort_field="listed_at"
                                sort=Signal::derive(move || controller.sort.get())
                                on_sort=Callback::new(move |f: String| controller.toggle_sort(&f))
                            />
                            <th class="table__header-cell">{"Available"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || controller.window().get().into_iter().map(|row| {
                            let id_for_star = row.id.clone();
                            let star_title = if row.is_favorite {
                                "Remove from favorites"
                            } else {
                                "Add to favorites"
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--icon">
                                        <button
                                            class="icon-button"
                                            class:icon-button--starred=row.is_favorite
                                            title=star_title
                                            on:click=move |e| {
                                                e.stop_propagation();
                                                toggle_favorite(id_for_star.clone());
                                            }
                                        >
                                            {icon(if row.is_favorite { "star-filled" } else { "star" })}
                                        </button>
                                    </td>
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.category.label()}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.0}", row.price_dzd)}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.0}", row.quantity_kg)}</td>
                                    <td class="table__cell">{row.wilaya}</td>
                                    <td class="table__cell">{row.seller_name}</td>
                                    <td class="table__cell">{row.listed_at}</td>
                                    <td class="table__cell">
                                        {if row.available { "Yes" } else { "No" }}
                                    </td>
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
    use contracts::shared::data_view::{filter_records, FilterState};

    fn rows() -> Vec<ScrapProductRow> {
        seed_products().into_iter().map(Into::into).collect()
    }

    #[test]
    fn test_search_matches_seller_case_insensitively() {
        let rows = rows();
        let mut state = FilterState::default();
        state.search = "plasticollect".into();
        let out = filter_records(&rows, &state, BUCKET_SETS);
        assert!(!out.is_empty());
        assert!(out.iter().all(|r| r.seller_name == "PlastiCollect"));
    }

    #[test]
    fn test_price_bucket_and_category_are_anded() {
        let rows = rows();
        let mut state = FilterState::default();
        state.set_choice("category", ScrapCategory::NonFerrousMetal.as_str());
        assert!(state.set_bucket(&PRICE_BUCKETS, "over-150k"));
        let out = filter_records(&rows, &state, BUCKET_SETS);
        assert!(!out.is_empty());
        assert!(out
            .iter()
            .all(|r| r.category == ScrapCategory::NonFerrousMetal && r.price_dzd >= 150_000.0));
    }

    #[test]
    fn test_csv_row_matches_header_width() {
        let rows = rows();
        assert_eq!(
            rows[0].to_csv_row().len(),
            ScrapProductRow::headers().len()
        );
    }
}
