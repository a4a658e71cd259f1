use serde_json::{Map, Value};

/// One page of dynamically shaped product rows, plus the total number of
/// rows matching the filters and the echoed pagination parameters.
#[derive(Clone, Debug)]
pub struct ProductPage {
    pub rows: Vec<Map<String, Value>>,
    pub total_count: i64,
    pub page: i64,
    pub limit: i64,
}
