//! Sortable table header cell
//!
//! Renders the sort indicator (▲ / ▼ / ⇅) for its field and reports clicks
//! to the list controller, which owns the actual `SortState`.

use contracts::shared::data_view::{SortDirection, SortState};
use leptos::prelude::*;

/// Indicator glyph for a header under the given sort state.
pub fn sort_indicator(sort: &SortState, field: &str) -> &'static str {
    match sort.direction_for(field) {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Field this column sorts by
    #[prop(into)]
    sort_field: String,

    /// Current sort state from the controller
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback when the header is clicked
    on_sort: Callback<String>,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <th class="table__header-cell">
            <div
                class="table__sortable-header"
                style=header_style
                on:click=handle_click
            >
                {label}
                <span class=move || {
                    if sort.get().direction_for(&sort_field_for_class).is_some() {
                        "table__sort-indicator table__sort-indicator--active"
                    } else {
                        "table__sort-indicator"
                    }
                }>
                    {move || sort.with(|s| sort_indicator(s, &sort_field_for_indicator))}
                </span>
            </div>
        </th>
    }
}
