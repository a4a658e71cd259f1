use thiserror::Error;

/// Terminal failures for one products request. Input-shape problems never
/// reach this enum: malformed filters, unknown columns, and bad pagination
/// values are normalized silently during parsing.
#[derive(Debug, Error)]
pub enum CatalogDomainError {
    #[error("count query error: {0}")]
    CountQueryFailed(String),

    #[error("database error: {0}")]
    QueryFailed(String),

    #[error("row iteration error: {0}")]
    RowIterationFailed(String),
}
