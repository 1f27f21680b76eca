pub mod filter_panel;
pub mod pagination_controls;
pub mod search_input;
pub mod sortable_header_cell;
pub mod stat_card;

pub use filter_panel::{FilterPanel, FilterTag};
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use sortable_header_cell::SortableHeaderCell;
pub use stat_card::StatCard;
