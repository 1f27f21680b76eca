//! Generic filter → sort → paginate pipeline shared by every list view.
//!
//! Each table-like view (products, orders, purchase history) plugs its row
//! type into the same three stages via the [`Queryable`] and [`Rankable`]
//! traits instead of duplicating the pipeline per entity. All stages are
//! pure: they take and return plain vectors and never touch UI state.

pub mod filter;
pub mod page;
pub mod sort;

pub use filter::{filter_records, Bucket, BucketSet, FilterState, Queryable, ALL_SENTINEL};
pub use page::{paginate, PageState};
pub use sort::{sort_records, Rankable, SortDirection, SortState};

/// One recomputed view of a list: the visible page plus the figures the
/// pagination controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewWindow<T> {
    pub rows: Vec<T>,
    pub total_filtered: usize,
    pub page_count: usize,
}

/// Run the full pipeline for one render pass.
///
/// The page is applied as-is: an out-of-range page yields an empty window
/// and it is the controller's job to clamp on the next recomputation.
pub fn compute_window<T>(
    items: &[T],
    filter: &FilterState,
    buckets: &[BucketSet],
    sort: &SortState,
    page: &PageState,
) -> ViewWindow<T>
where
    T: Queryable + Rankable + Clone,
{
    let filtered = filter_records(items, filter, buckets);
    let sorted = sort_records(filtered, sort);
    let page_count = PageState::page_count(sorted.len(), page.page_size);
    let rows = paginate(&sorted, page);
    ViewWindow {
        rows,
        total_filtered: sorted.len(),
        page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        code: String,
        name: String,
        status: &'static str,
        price: f64,
        starred: bool,
    }

    impl Queryable for Item {
        fn search_fields(&self) -> Vec<String> {
            vec![self.code.clone(), self.name.clone()]
        }

        fn choice_field(&self, field: &str) -> Option<String> {
            match field {
                "status" => Some(self.status.to_string()),
                _ => None,
            }
        }

        fn numeric_field(&self, field: &str) -> Option<f64> {
            match field {
                "price" => Some(self.price),
                _ => None,
            }
        }

        fn flag_field(&self, field: &str) -> Option<bool> {
            match field {
                "starred" => Some(self.starred),
                _ => None,
            }
        }
    }

    impl Rankable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "price" => self.price.partial_cmp(&other.price).unwrap_or(Ordering::Equal),
                "name" => self.name.cmp(&other.name),
                _ => Ordering::Equal,
            }
        }
    }

    const PRICE_BUCKETS: BucketSet = BucketSet {
        field: "price",
        buckets: &[
            Bucket { key: "under-10k", label: "Under 10 000", min: None, max: Some(10_000.0) },
            Bucket { key: "10k-20k", label: "10 000 – 20 000", min: Some(10_000.0), max: Some(20_000.0) },
            Bucket { key: "over-20k", label: "Over 20 000", min: Some(20_000.0), max: None },
        ],
    };

    fn catalog() -> Vec<Item> {
        let prices = [10_000.0, 15_000.0, 25_000.0, 8_000.0, 5_000.0, 12_000.0, 30_000.0, 18_000.0];
        let statuses = ["buyed", "pending", "buyed", "refused", "buyed", "pending", "refused", "pending"];
        prices
            .iter()
            .zip(statuses.iter())
            .enumerate()
            .map(|(i, (&price, &status))| Item {
                code: (i + 1).to_string(),
                name: format!("Lot {}", i + 1),
                status,
                price,
                starred: i % 2 == 0,
            })
            .collect()
    }

    #[test]
    fn test_filter_yields_subset() {
        let items = catalog();
        let mut state = FilterState::default();
        state.search = "lot".into();
        state.flags.insert("starred".into(), true);
        let out = filter_records(&items, &state, &[PRICE_BUCKETS]);
        assert!(out.len() <= items.len());
        assert!(out.iter().all(|o| items.contains(o)));
    }

    #[test]
    fn test_cleared_filter_is_identity() {
        let items = catalog();
        let mut state = FilterState::default();
        state.search = "lot 3".into();
        state.choices.insert("status".into(), "buyed".into());
        state.clear();
        let out = filter_records(&items, &state, &[PRICE_BUCKETS]);
        assert_eq!(out, items);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = catalog();
        let mut state = FilterState::default();
        state.choices.insert("status".into(), "pending".into());
        let once = filter_records(&items, &state, &[PRICE_BUCKETS]);
        let twice = filter_records(&once, &state, &[PRICE_BUCKETS]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_status_buyed_scenario() {
        // 8 records, three of them "buyed" (codes 1, 3, 5), original order kept
        let items = catalog();
        let mut state = FilterState::default();
        state.choices.insert("status".into(), "buyed".into());
        let out = filter_records(&items, &state, &[PRICE_BUCKETS]);
        let codes: Vec<&str> = out.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_price_sort_ascending_scenario() {
        let items = catalog();
        let sort = SortState {
            field: Some("price".into()),
            direction: SortDirection::Ascending,
        };
        let sorted = sort_records(items, &sort);
        let prices: Vec<f64> = sorted.iter().map(|i| i.price).collect();
        assert_eq!(
            prices,
            vec![5_000.0, 8_000.0, 10_000.0, 12_000.0, 15_000.0, 18_000.0, 25_000.0, 30_000.0]
        );
    }

    #[test]
    fn test_pages_reconstruct_filtered_sequence() {
        let items = catalog();
        let mut state = FilterState::default();
        state.choices.insert("status".into(), "pending".into());
        let sort = SortState {
            field: Some("price".into()),
            direction: SortDirection::Descending,
        };
        let filtered = sort_records(filter_records(&items, &state, &[PRICE_BUCKETS]), &sort);

        let page_size = 2;
        let pages = PageState::page_count(filtered.len(), page_size);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            rebuilt.extend(paginate(&filtered, &PageState { page, page_size }));
        }
        assert_eq!(rebuilt, filtered);
    }

    #[test]
    fn test_oversized_page_size_yields_single_full_page() {
        let items = catalog();
        let page = PageState { page: 1, page_size: 100 };
        assert_eq!(PageState::page_count(items.len(), page.page_size), 1);
        assert_eq!(paginate(&items, &page), items);
    }

    #[test]
    fn test_out_of_range_page_is_empty_then_clamps() {
        // 8 records, page 3 of size 5 starts past the end
        let items = catalog();
        let page = PageState { page: 3, page_size: 5 };
        assert!(paginate(&items, &page).is_empty());
        let clamped = page.clamped(items.len());
        assert_eq!(clamped.page, 2);
        assert_eq!(paginate(&items, &clamped).len(), 3);
    }

    #[test]
    fn test_compute_window_reports_totals() {
        let items = catalog();
        let mut state = FilterState::default();
        state.buckets.insert("price".into(), "under-10k".into());
        let window = compute_window(
            &items,
            &state,
            &[PRICE_BUCKETS],
            &SortState::default(),
            &PageState { page: 1, page_size: 10 },
        );
        assert_eq!(window.total_filtered, 2);
        assert_eq!(window.page_count, 1);
        let prices: Vec<f64> = window.rows.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![8_000.0, 5_000.0]);
    }

    #[test]
    fn test_empty_catalog_is_not_an_error() {
        let items: Vec<Item> = Vec::new();
        let mut state = FilterState::default();
        state.search = "anything".into();
        let window = compute_window(
            &items,
            &state,
            &[PRICE_BUCKETS],
            &SortState::default(),
            &PageState::default(),
        );
        assert!(window.rows.is_empty());
        assert_eq!(window.page_count, 1);
    }
}
