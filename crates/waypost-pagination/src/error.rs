use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during paged query execution
///
/// "No matching rows" is not an error; the page fetch maps it to an empty
/// result. Count-query failures are first-class: the concurrent count task
/// is always joined and its error surfaced, never swallowed.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// The page-data query failed
    #[error("Page query failed: {0}")]
    Query(sqlx::Error),

    /// The concurrent count query failed
    #[error("Count query failed: {0}")]
    Count(sqlx::Error),

    /// The count task panicked or was cancelled before completing
    #[error("Count task did not complete: {0}")]
    CountJoin(String),

    /// The count task exceeded the configured wait bound
    #[error("Count query timed out after {0:?}")]
    CountTimeout(Duration),
}
