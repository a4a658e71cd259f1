use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::{
    domain::{
        model::{
            enums::catalog_domain_error::CatalogDomainError,
            queries::list_products_query::{ListProductsQuery, ListProductsQueryParts},
        },
        services::product_query_service::ProductQueryService,
    },
    interfaces::rest::resources::product_page_resource::ProductPageResource,
};

#[derive(Clone)]
pub struct ProductRestControllerState {
    pub query_service: Arc<dyn ProductQueryService>,
}

pub fn router(state: ProductRestControllerState) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "catalog",
    params(
        ("filters" = Option<String>, Query, description = "Repeatable range filter, `field:min:max` over the numeric allow-set; malformed entries are dropped"),
        ("columns" = Option<String>, Query, description = "Comma-separated projection over the column allow-set"),
        ("page" = Option<i64>, Query, description = "Page number, >= 1, default 1"),
        ("limit" = Option<i64>, Query, description = "Rows per page, >= 1, default 100"),
    ),
    responses(
        (status = 200, description = "One page of product rows", body = ProductPageResource),
        (status = 500, description = "Database failure, plain-text `<context>: <driver error>`", body = String)
    )
)]
pub async fn list_products(
    State(state): State<ProductRestControllerState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ProductPageResource>, (StatusCode, String)> {
    // `filters` repeats, so the pairs are collected manually instead of
    // through a keyed map. The scalar parameters keep their first
    // occurrence when repeated.
    let mut raw_filters = Vec::new();
    let mut raw_columns = None;
    let mut raw_page = None;
    let mut raw_limit = None;
    for (key, value) in params {
        match key.as_str() {
            "filters" => raw_filters.push(value),
            "columns" if raw_columns.is_none() => raw_columns = Some(value),
            "page" if raw_page.is_none() => raw_page = Some(value),
            "limit" if raw_limit.is_none() => raw_limit = Some(value),
            _ => {}
        }
    }

    let query = ListProductsQuery::new(ListProductsQueryParts {
        raw_filters,
        raw_columns,
        raw_page,
        raw_limit,
    });

    let page = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ProductPageResource {
        data: page.rows,
        total_count: page.total_count,
        page: page.page,
        limit: page.limit,
    }))
}

fn map_domain_error(error: CatalogDomainError) -> (StatusCode, String) {
    // Every domain failure is a database-side problem; input-shape issues
    // were normalized during parsing and never reach this point.
    (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
}
