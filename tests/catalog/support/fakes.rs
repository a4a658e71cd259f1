use std::sync::Mutex;

use async_trait::async_trait;
use product_query_api::catalog::{
    domain::model::{
        enums::catalog_domain_error::CatalogDomainError,
        value_objects::range_filter::RangeFilter,
    },
    infrastructure::persistence::repositories::product_repository::{
        ProductRepository, ProductSearchCriteria,
    },
};
use serde_json::{Map, Value};

#[derive(Default)]
struct FakeProductRepositoryState {
    rows: Vec<Map<String, Value>>,
    total_count: i64,
    count_calls: usize,
    list_calls: usize,
    last_count_filters: Option<Vec<RangeFilter>>,
    last_list_criteria: Option<ProductSearchCriteria>,
    count_should_fail: bool,
    list_should_fail: bool,
}

pub struct FakeProductRepository {
    state: Mutex<FakeProductRepositoryState>,
}

impl FakeProductRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeProductRepositoryState::default()),
        }
    }

    pub fn set_table(&self, rows: Vec<Map<String, Value>>) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.total_count = rows.len() as i64;
        state.rows = rows;
    }

    pub fn set_count_should_fail(&self, value: bool) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .count_should_fail = value;
    }

    pub fn set_list_should_fail(&self, value: bool) {
        self.state.lock().expect("mutex poisoned").list_should_fail = value;
    }

    pub fn count_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").count_calls
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").list_calls
    }

    pub fn last_count_filters(&self) -> Option<Vec<RangeFilter>> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .last_count_filters
            .clone()
    }

    pub fn last_list_criteria(&self) -> Option<ProductSearchCriteria> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .last_list_criteria
            .clone()
    }
}

#[async_trait]
impl ProductRepository for FakeProductRepository {
    async fn count_products(&self, filters: &[RangeFilter]) -> Result<i64, CatalogDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.count_calls += 1;
        state.last_count_filters = Some(filters.to_vec());

        if state.count_should_fail {
            return Err(CatalogDomainError::CountQueryFailed(
                "connection refused".to_string(),
            ));
        }

        Ok(state.total_count)
    }

    async fn list_products(
        &self,
        criteria: ProductSearchCriteria,
    ) -> Result<Vec<Map<String, Value>>, CatalogDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.list_calls += 1;

        if state.list_should_fail {
            state.last_list_criteria = Some(criteria);
            return Err(CatalogDomainError::QueryFailed(
                "relation \"products\" does not exist".to_string(),
            ));
        }

        let window = state
            .rows
            .iter()
            .skip(criteria.offset.max(0) as usize)
            .take(criteria.limit.max(0) as usize)
            .cloned()
            .collect();
        state.last_list_criteria = Some(criteria);

        Ok(window)
    }
}
