use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{
    domain::{
        model::{
            entities::product_page::ProductPage,
            enums::catalog_domain_error::CatalogDomainError,
            queries::list_products_query::ListProductsQuery,
        },
        services::product_query_service::ProductQueryService,
    },
    infrastructure::persistence::repositories::product_repository::{
        ProductRepository, ProductSearchCriteria,
    },
};

pub struct ProductQueryServiceImpl {
    repository: Arc<dyn ProductRepository>,
}

impl ProductQueryServiceImpl {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductQueryService for ProductQueryServiceImpl {
    async fn handle_list(
        &self,
        query: ListProductsQuery,
    ) -> Result<ProductPage, CatalogDomainError> {
        let window = query.window();

        // The count shares the WHERE clause and bound values with the data
        // query, so both always agree on the matching set.
        let total_count = self.repository.count_products(query.filters()).await?;

        let rows = self
            .repository
            .list_products(ProductSearchCriteria {
                columns: query.columns().clone(),
                filters: query.filters().to_vec(),
                limit: window.limit(),
                offset: window.offset(),
            })
            .await?;

        Ok(ProductPage {
            rows,
            total_count,
            page: window.page(),
            limit: window.limit(),
        })
    }
}
