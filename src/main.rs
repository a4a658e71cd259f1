use dotenvy::dotenv;
use product_query_api::{
    catalog::{
        build_catalog_router,
        interfaces::rest::resources::product_page_resource::ProductPageResource,
    },
    config::app_config::AppConfig,
    telemetry,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        product_query_api::catalog::interfaces::rest::controllers::product_rest_controller::list_products
    ),
    components(schemas(ProductPageResource)),
    tags(
        (name = "catalog", description = "Read-only product catalog queries")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    telemetry::init_tracing();

    let config = AppConfig::from_env().expect("DATABASE_URL must be set");

    let catalog_router = build_catalog_router(&config)
        .await
        .expect("failed to connect to database");

    let app = catalog_router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new("."))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(%addr, "product query service listening");

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
