use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Response envelope for `GET /products`: the dynamically shaped rows plus
/// the total match count and the echoed pagination parameters.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductPageResource {
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Map<String, Value>>,
    #[serde(rename = "totalCount")]
    pub total_count: i64,
    pub page: i64,
    pub limit: i64,
}
