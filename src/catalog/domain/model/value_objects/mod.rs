pub mod column_selection;
pub mod page_window;
pub mod range_filter;
