// Concurrent paged query execution
//
// The count query runs on its own task against a cloned pool handle while
// the page fetch runs in the calling task. Pool clones share the
// connection set but each query checks out its own connection, so the two
// statements never share a session. The count task is joined (or aborted)
// on every path before this function returns.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::debug;

use crate::error::PaginationError;
use crate::page::Page;
use crate::query::{PageQuery, PagedSource};

/// Execute a paged read: one page of rows plus the total row count
///
/// The page statement and the count statement derived from `source` run
/// concurrently; either may reach the database first. The count value is
/// read only after the join, bounded by `query.count_timeout`.
///
/// "No rows" is success with an empty page. Any other page-query error
/// aborts the operation (the count task is cancelled and awaited first);
/// count-query errors are returned as [`PaginationError::Count`].
pub async fn paginate<T>(
    pool: &PgPool,
    source: &PagedSource,
    query: &PageQuery,
) -> Result<Page<T>, PaginationError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let page = query.effective_page();
    let limit = query.effective_limit();
    let offset = if page == 1 { 0 } else { (page - 1) * limit };

    let count_statement = source.count_statement();
    let page_statement = source.page_statement(offset, limit, query.order_by.as_deref());

    if query.debug {
        debug!(page, limit, statement = %page_statement, "Executing page query");
        debug!(statement = %count_statement, "Executing count query");
    }

    let count_pool = pool.clone();
    let count_task: JoinHandle<Result<i64, sqlx::Error>> = tokio::spawn(async move {
        sqlx::query_scalar(&count_statement)
            .fetch_one(&count_pool)
            .await
    });

    let data = match sqlx::query_as::<_, T>(&page_statement).fetch_all(pool).await {
        Ok(rows) => rows,
        Err(sqlx::Error::RowNotFound) => Vec::new(),
        Err(e) => {
            // the count task must not outlive the failed call
            count_task.abort();
            let _ = count_task.await;
            return Err(PaginationError::Query(e));
        }
    };

    let abort = count_task.abort_handle();
    let total_record = match timeout(query.count_timeout, count_task).await {
        Ok(Ok(Ok(count))) => count,
        Ok(Ok(Err(e))) => return Err(PaginationError::Count(e)),
        Ok(Err(e)) => return Err(PaginationError::CountJoin(e.to_string())),
        Err(_) => {
            abort.abort();
            return Err(PaginationError::CountTimeout(query.count_timeout));
        }
    };

    Ok(Page::assemble(data, total_record, page, limit, query.bounded_nav))
}
