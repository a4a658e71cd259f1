/// Numeric columns that may appear as the field of a range filter.
pub const FILTERABLE_FIELDS: [&str; 6] = [
    "product_weight_g",
    "product_length_cm",
    "product_width_cm",
    "product_height_cm",
    "product_photos_qty",
    "product_description_length",
];

/// A bounded-range predicate on one allow-listed numeric column.
///
/// Instances only exist via [`RangeFilter::parse`], so a constructed filter
/// always names a field from [`FILTERABLE_FIELDS`].
#[derive(Clone, Debug, PartialEq)]
pub struct RangeFilter {
    field: String,
    min: f64,
    max: f64,
}

impl RangeFilter {
    /// Parses a raw `field:min:max` query value.
    ///
    /// Entries that do not split into exactly three parts, name a field
    /// outside the allow-set, or carry non-numeric bounds yield `None` and
    /// are dropped by the caller. Bounds are kept in input order even when
    /// min > max.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(':');
        let field = parts.next()?;
        let min = parts.next()?;
        let max = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        if !FILTERABLE_FIELDS.contains(&field) {
            return None;
        }

        let min = min.parse::<f64>().ok()?;
        let max = max.parse::<f64>().ok()?;

        Some(Self {
            field: field.to_string(),
            min,
            max,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}
