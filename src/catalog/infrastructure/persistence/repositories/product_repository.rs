use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::catalog::domain::model::{
    enums::catalog_domain_error::CatalogDomainError,
    value_objects::{column_selection::ColumnSelection, range_filter::RangeFilter},
};

/// Criteria for one windowed products query.
///
/// Holds the validated value objects rather than raw strings, so every
/// identifier reaching SQL assembly has already passed its allow-set check.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductSearchCriteria {
    pub columns: ColumnSelection,
    pub filters: Vec<RangeFilter>,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Total number of rows matching the filters, ignoring the window.
    async fn count_products(&self, filters: &[RangeFilter]) -> Result<i64, CatalogDomainError>;

    /// One window of rows, each an open-ended column-name-to-value mapping.
    async fn list_products(
        &self,
        criteria: ProductSearchCriteria,
    ) -> Result<Vec<Map<String, Value>>, CatalogDomainError>;
}
