use crate::catalog::domain::model::value_objects::{
    column_selection::ColumnSelection, page_window::PageWindow, range_filter::RangeFilter,
};

#[derive(Clone, Debug)]
pub struct ListProductsQuery {
    filters: Vec<RangeFilter>,
    columns: ColumnSelection,
    window: PageWindow,
}

pub struct ListProductsQueryParts {
    pub raw_filters: Vec<String>,
    pub raw_columns: Option<String>,
    pub raw_page: Option<String>,
    pub raw_limit: Option<String>,
}

impl ListProductsQuery {
    /// Normalizes the raw query-string inputs into a validated query.
    ///
    /// Infallible by contract: every malformed or disallowed input is
    /// dropped or replaced by a default, never rejected.
    pub fn new(parts: ListProductsQueryParts) -> Self {
        let filters = parts
            .raw_filters
            .iter()
            .filter_map(|raw| RangeFilter::parse(raw))
            .collect();
        let columns = ColumnSelection::parse(parts.raw_columns.as_deref());
        let window = PageWindow::parse(parts.raw_page.as_deref(), parts.raw_limit.as_deref());

        Self {
            filters,
            columns,
            window,
        }
    }

    pub fn filters(&self) -> &[RangeFilter] {
        &self.filters
    }

    pub fn columns(&self) -> &ColumnSelection {
        &self.columns
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }
}
