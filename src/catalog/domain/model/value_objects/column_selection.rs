/// Columns that may be requested through the `columns` query parameter.
pub const SELECTABLE_COLUMNS: [&str; 8] = [
    "product_category_name",
    "product_name_length",
    "product_description_length",
    "product_photos_qty",
    "product_weight_g",
    "product_length_cm",
    "product_height_cm",
    "product_width_cm",
];

/// Projection used when the request selects nothing valid.
pub const DEFAULT_COLUMNS: [&str; 2] = ["product_category_name", "product_weight_g"];

/// The projected column list for a products query.
///
/// Always non-empty: parsing substitutes [`DEFAULT_COLUMNS`] when the
/// requested list is absent, empty, or fully outside the allow-set.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSelection(Vec<String>);

impl ColumnSelection {
    /// Parses a comma-separated column list against [`SELECTABLE_COLUMNS`].
    ///
    /// Entries are trimmed and kept in request order; unknown entries are
    /// dropped silently. Duplicates are preserved.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut columns = Vec::new();
        if let Some(raw) = raw {
            for entry in raw.split(',') {
                let entry = entry.trim();
                if SELECTABLE_COLUMNS.contains(&entry) {
                    columns.push(entry.to_string());
                }
            }
        }

        if columns.is_empty() {
            columns = DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect();
        }

        Self(columns)
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn select_clause(&self) -> String {
        self.0.join(", ")
    }
}
