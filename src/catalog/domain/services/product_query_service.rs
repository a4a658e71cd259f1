use async_trait::async_trait;

use crate::catalog::domain::model::{
    entities::product_page::ProductPage, enums::catalog_domain_error::CatalogDomainError,
    queries::list_products_query::ListProductsQuery,
};

#[async_trait]
pub trait ProductQueryService: Send + Sync {
    async fn handle_list(
        &self,
        query: ListProductsQuery,
    ) -> Result<ProductPage, CatalogDomainError>;
}
