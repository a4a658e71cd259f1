use std::sync::Arc;

use product_query_api::catalog::application::query_services::product_query_service_impl::ProductQueryServiceImpl;

use super::fakes::FakeProductRepository;

pub struct CatalogQueryHarness {
    pub repository: Arc<FakeProductRepository>,
    pub service: ProductQueryServiceImpl,
}

pub fn create_query_harness() -> CatalogQueryHarness {
    let repository = Arc::new(FakeProductRepository::new());
    let service = ProductQueryServiceImpl::new(repository.clone());

    CatalogQueryHarness {
        repository,
        service,
    }
}
