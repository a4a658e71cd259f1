use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use futures_util::TryStreamExt;
use serde_json::{Map, Value};
use sqlx::{
    Column, PgPool, Row, TypeInfo, ValueRef,
    postgres::{PgColumn, PgRow},
    types::BigDecimal,
};
use tracing::{error, warn};

use crate::catalog::{
    domain::model::{
        enums::catalog_domain_error::CatalogDomainError, value_objects::range_filter::RangeFilter,
    },
    infrastructure::persistence::repositories::product_repository::{
        ProductRepository, ProductSearchCriteria,
    },
};

const PRODUCTS_TABLE: &str = "products";
const ORDER_BY_COLUMN: &str = "product_weight_g";

pub struct SqlxProductRepositoryImpl {
    pool: PgPool,
}

impl SqlxProductRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Conjoined WHERE clause for the given filters.
    ///
    /// Starts from the tautology `1=1` so appending with ` AND ` stays
    /// well-formed when no filter is present. Bound values are referenced
    /// through positional placeholders only; field names come from
    /// [`RangeFilter`], which cannot hold an identifier outside its
    /// allow-set.
    pub fn build_where_clause(filters: &[RangeFilter]) -> String {
        let mut clause = String::from("WHERE 1=1");
        let mut argument = 1;
        for filter in filters {
            clause.push_str(&format!(
                " AND {} BETWEEN ${} AND ${}",
                filter.field(),
                argument,
                argument + 1
            ));
            argument += 2;
        }

        clause
    }

    pub fn build_count_statement(filters: &[RangeFilter]) -> String {
        format!(
            "SELECT COUNT(*) FROM {} {}",
            PRODUCTS_TABLE,
            Self::build_where_clause(filters)
        )
    }

    pub fn build_list_statement(criteria: &ProductSearchCriteria) -> String {
        let window_argument = criteria.filters.len() * 2 + 1;
        format!(
            "SELECT {} FROM {} {} ORDER BY {} LIMIT ${} OFFSET ${}",
            criteria.columns.select_clause(),
            PRODUCTS_TABLE,
            Self::build_where_clause(&criteria.filters),
            ORDER_BY_COLUMN,
            window_argument,
            window_argument + 1
        )
    }

    fn decode_row(row: &PgRow) -> Result<Map<String, Value>, sqlx::Error> {
        let mut object = Map::new();
        for column in row.columns() {
            object.insert(column.name().to_string(), Self::decode_column(row, column)?);
        }

        Ok(object)
    }

    /// Textual last resort for values with no typed decoding.
    pub fn text_fallback(bytes: &[u8]) -> Value {
        Value::from(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Normalizes one column value into JSON without a fixed schema.
    ///
    /// SQL NULL stays null; integers widen to i64, floats to f64, text and
    /// bytea decode as strings; numeric, bool, and timestamp values fall
    /// back to their textual representation, as does any remaining type
    /// via its raw wire bytes.
    fn decode_column(row: &PgRow, column: &PgColumn) -> Result<Value, sqlx::Error> {
        let ordinal = column.ordinal();
        let value = match column.type_info().name() {
            "INT2" => row
                .try_get::<Option<i16>, _>(ordinal)?
                .map(|v| Value::from(i64::from(v))),
            "INT4" => row
                .try_get::<Option<i32>, _>(ordinal)?
                .map(|v| Value::from(i64::from(v))),
            "INT8" => row.try_get::<Option<i64>, _>(ordinal)?.map(Value::from),
            "FLOAT4" => row
                .try_get::<Option<f32>, _>(ordinal)?
                .map(|v| Value::from(f64::from(v))),
            "FLOAT8" => row.try_get::<Option<f64>, _>(ordinal)?.map(Value::from),
            "NUMERIC" => row
                .try_get::<Option<BigDecimal>, _>(ordinal)?
                .map(|v| Value::from(v.to_string())),
            "TEXT" | "VARCHAR" | "CHAR" | "NAME" => {
                row.try_get::<Option<String>, _>(ordinal)?.map(Value::from)
            }
            "BYTEA" => row
                .try_get::<Option<Vec<u8>>, _>(ordinal)?
                .map(|v| Self::text_fallback(&v)),
            "BOOL" => row
                .try_get::<Option<bool>, _>(ordinal)?
                .map(|v| Value::from(v.to_string())),
            "TIMESTAMPTZ" => row
                .try_get::<Option<DateTime<Utc>>, _>(ordinal)?
                .map(|v| Value::from(v.to_string())),
            "TIMESTAMP" => row
                .try_get::<Option<NaiveDateTime>, _>(ordinal)?
                .map(|v| Value::from(v.to_string())),
            "DATE" => row
                .try_get::<Option<NaiveDate>, _>(ordinal)?
                .map(|v| Value::from(v.to_string())),
            _ => match row.try_get::<Option<String>, _>(ordinal) {
                Ok(value) => value.map(Value::from),
                Err(_) => {
                    let raw = row.try_get_raw(ordinal)?;
                    if raw.is_null() {
                        None
                    } else {
                        raw.as_bytes().ok().map(Self::text_fallback)
                    }
                }
            },
        };

        Ok(value.unwrap_or(Value::Null))
    }
}

#[async_trait]
impl ProductRepository for SqlxProductRepositoryImpl {
    async fn count_products(&self, filters: &[RangeFilter]) -> Result<i64, CatalogDomainError> {
        let statement = Self::build_count_statement(filters);
        let mut query = sqlx::query_scalar::<_, i64>(&statement);
        for filter in filters {
            query = query.bind(filter.min()).bind(filter.max());
        }

        query.fetch_one(&self.pool).await.map_err(|e| {
            error!(error = %e, "count query failed");
            CatalogDomainError::CountQueryFailed(e.to_string())
        })
    }

    async fn list_products(
        &self,
        criteria: ProductSearchCriteria,
    ) -> Result<Vec<Map<String, Value>>, CatalogDomainError> {
        let statement = Self::build_list_statement(&criteria);
        let mut query = sqlx::query(&statement);
        for filter in &criteria.filters {
            query = query.bind(filter.min()).bind(filter.max());
        }
        query = query.bind(criteria.limit).bind(criteria.offset);

        let mut stream = query.fetch(&self.pool);
        let mut rows = Vec::new();
        let mut started = false;
        loop {
            match stream.try_next().await {
                Ok(Some(row)) => {
                    started = true;
                    match Self::decode_row(&row) {
                        Ok(object) => rows.push(object),
                        // Mirror of the scan-failure policy: skip the row,
                        // keep the request alive.
                        Err(e) => warn!(error = %e, "row decode failed, skipping row"),
                    }
                }
                Ok(None) => break,
                Err(e) if !started => {
                    error!(error = %e, "products query failed");
                    return Err(CatalogDomainError::QueryFailed(e.to_string()));
                }
                Err(e) => {
                    return Err(CatalogDomainError::RowIterationFailed(e.to_string()));
                }
            }
        }

        Ok(rows)
    }
}
