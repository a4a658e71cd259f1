pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 100;

/// The LIMIT/OFFSET slice of the result set returned for one page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageWindow {
    page: i64,
    limit: i64,
}

impl PageWindow {
    /// Parses raw `page` and `limit` parameters.
    ///
    /// A missing, non-numeric, or non-positive value falls back to its
    /// default (page 1, limit 100) rather than erroring.
    pub fn parse(raw_page: Option<&str>, raw_limit: Option<&str>) -> Self {
        let page = raw_page
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v >= 1)
            .unwrap_or(DEFAULT_PAGE);
        let limit = raw_limit
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v >= 1)
            .unwrap_or(DEFAULT_LIMIT);

        Self { page, limit }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Saturates instead of overflowing: the parameters come straight from
    /// the query string, so arbitrarily large pages must not panic or wrap
    /// into a negative offset.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}
