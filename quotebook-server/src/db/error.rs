//! Storage error type

/// Error returned by every storage operation.
///
/// The display string names the failed operation and is what callers see in
/// the `err` field of the response envelope.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("failed to {op}: {source}")]
    Query {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },
}

impl DbError {
    /// Build a mapper for `map_err` that tags a sqlx error with the operation.
    pub fn query(op: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Query { op, source }
    }
}
