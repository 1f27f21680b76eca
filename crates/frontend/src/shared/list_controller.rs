//! Reactive view-state controller shared by every list view.
//!
//! Owns the mutable UI state of one table (filter values, sort key, current
//! page, expanded/selected rows) and derives the visible window through the
//! pure pipeline from `contracts::shared::data_view`. Every mutation runs a
//! full recomputation; catalogs are tens of records, so there is nothing to
//! memoize beyond what the `Memo`s already dedup.

use contracts::shared::data_view::{
    filter_records, paginate, sort_records, BucketSet, FilterState, PageState, Queryable,
    Rankable, SortState,
};
use leptos::prelude::*;
use std::collections::HashSet;

/// Stable row identity used for the expanded/selected sets.
pub trait RowKey {
    fn row_id(&self) -> String;
}

pub struct ListController<T: Send + Sync + 'static> {
    pub source: RwSignal<Vec<T>>,
    pub filter: RwSignal<FilterState>,
    pub sort: RwSignal<SortState>,
    pub page: RwSignal<PageState>,
    pub expanded: RwSignal<HashSet<String>>,
    pub selected: RwSignal<HashSet<String>>,
    buckets: StoredValue<&'static [BucketSet]>,
    filtered: Memo<Vec<T>>,
    window: Memo<Vec<T>>,
    page_count: Memo<usize>,
}

// Manual impls: every field is Copy regardless of whether T is.
impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Queryable + Rankable + RowKey + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: Vec<T>, buckets: &'static [BucketSet], page_size: usize) -> Self {
        let source = RwSignal::new(initial);
        let filter = RwSignal::new(FilterState::default());
        let sort = RwSignal::new(SortState::default());
        let page = RwSignal::new(PageState { page: 1, page_size });
        let buckets_sv = StoredValue::new(buckets);

        let filtered = Memo::new(move |_| {
            let rows = source.with(|items| {
                filter.with(|f| filter_records(items, f, buckets_sv.get_value()))
            });
            sort.with(|s| sort_records(rows, s))
        });

        let page_count = Memo::new(move |_| {
            PageState::page_count(filtered.with(Vec::len), page.get().page_size)
        });

        let window = Memo::new(move |_| filtered.with(|rows| paginate(rows, &page.get())));

        // Clamp the page whenever a filter mutation shrinks the result set;
        // the out-of-range render pass shows an empty window, the clamped
        // one follows immediately.
        Effect::new(move |_| {
            let total = filtered.with(Vec::len);
            let current = page.get_untracked();
            let clamped = current.clamped(total);
            if clamped != current {
                page.set(clamped);
            }
        });

        Self {
            source,
            filter,
            sort,
            page,
            expanded: RwSignal::new(HashSet::new()),
            selected: RwSignal::new(HashSet::new()),
            buckets: buckets_sv,
            filtered,
            window,
            page_count,
        }
    }

    // ── Derived views ────────────────────────────────────────────────────

    /// Filtered + sorted sequence (not paginated); this is what exports see.
    pub fn filtered(&self) -> Memo<Vec<T>> {
        self.filtered
    }

    /// Rows of the current page.
    pub fn window(&self) -> Memo<Vec<T>> {
        self.window
    }

    pub fn page_count(&self) -> Memo<usize> {
        self.page_count
    }

    pub fn active_filter_count(&self) -> usize {
        self.filter.with(|f| f.active_count())
    }

    // ── Filter mutations ─────────────────────────────────────────────────

    pub fn set_search(&self, text: String) {
        self.filter.update(|f| f.search = text);
        self.reset_page();
    }

    pub fn set_choice(&self, field: &str, value: &str) {
        self.filter.update(|f| f.set_choice(field, value));
        self.reset_page();
    }

    /// Bucket keys are validated here, at the boundary; an unknown key is
    /// logged and ignored so it never reaches the predicate engine.
    pub fn set_bucket(&self, field: &str, key: &str) {
        let Some(set) = self
            .buckets
            .get_value()
            .iter()
            .find(|s| s.field == field)
            .copied()
        else {
            log::warn!("no bucket set for field '{}'", field);
            return;
        };
        let mut accepted = true;
        self.filter.update(|f| accepted = f.set_bucket(&set, key));
        if !accepted {
            log::warn!("unknown bucket key '{}' for field '{}'", key, field);
            return;
        }
        self.reset_page();
    }

    pub fn set_flag(&self, field: &str, value: Option<bool>) {
        self.filter.update(|f| f.set_flag(field, value));
        self.reset_page();
    }

    pub fn clear_filters(&self) {
        self.filter.update(|f| f.clear());
        self.reset_page();
    }

    // ── Sort / page mutations ────────────────────────────────────────────

    pub fn toggle_sort(&self, field: &str) {
        self.sort.update(|s| s.toggle(field));
    }

    pub fn set_page(&self, page: usize) {
        let last = self.page_count.get_untracked();
        self.page.update(|p| p.page = page.clamp(1, last));
    }

    pub fn set_page_size(&self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.page.set(PageState { page: 1, page_size });
    }

    fn reset_page(&self) {
        self.page.update(|p| p.page = 1);
    }

    // ── Row UI flags ─────────────────────────────────────────────────────

    pub fn toggle_expanded(&self, id: &str) {
        self.expanded.update(|set| {
            if !set.remove(id) {
                set.insert(id.to_string());
            }
        });
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.with(|set| set.contains(id))
    }

    pub fn toggle_selected(&self, id: &str, checked: bool) {
        self.selected.update(|set| {
            if checked {
                set.insert(id.to_string());
            } else {
                set.remove(id);
            }
        });
    }

    pub fn clear_selection(&self) {
        self.selected.set(HashSet::new());
    }

    // ── Source mutations ─────────────────────────────────────────────────

    /// Apply a local edit (favorite toggle, cancel) to the source rows; all
    /// derived views recompute.
    pub fn mutate(&self, f: impl FnOnce(&mut Vec<T>)) {
        self.source.update(f);
    }
}
