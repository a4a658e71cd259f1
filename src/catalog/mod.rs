use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    catalog::{
        application::query_services::product_query_service_impl::ProductQueryServiceImpl,
        infrastructure::persistence::repositories::postgres::sqlx_product_repository_impl::SqlxProductRepositoryImpl,
        interfaces::rest::controllers::product_rest_controller::{
            ProductRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Connects the process-wide pool and wires the catalog context together.
/// Connection failure here is a startup failure; the caller aborts on it.
pub async fn build_catalog_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url)
        .await
        .map_err(|e| e.to_string())?;

    let repository = Arc::new(SqlxProductRepositoryImpl::new(pool));
    let query_service = Arc::new(ProductQueryServiceImpl::new(repository));

    Ok(router(ProductRestControllerState { query_service }))
}
