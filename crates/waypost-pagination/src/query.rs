// Page query parameters and statement derivation

use std::time::Duration;

/// Page used when the requested page is below 1.
pub const DEFAULT_PAGE: i64 = 1;

/// Rows per page when the requested limit is 0.
pub const DEFAULT_LIMIT: i64 = 20;

const DEFAULT_COUNT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pagination parameters for a paged read
///
/// `page` is 1-based. Values are normalized before any query executes:
/// `page < 1` becomes 1 and `limit == 0` becomes 20. Normalization happens
/// on the effective values; the caller's struct is never mutated.
#[derive(Debug, Clone)]
pub struct PageQuery {
    /// Requested page, 1-based
    pub page: i64,

    /// Rows per page; 0 selects the default of 20
    pub limit: i64,

    /// Raw ORDER BY expression in engine-native syntax, passed through
    /// verbatim. Callers must not interpolate untrusted input here.
    pub order_by: Option<String>,

    /// Log the generated statements before execution
    pub debug: bool,

    /// Clamp `next_page` into the real page range instead of preserving
    /// the legacy off-by-one on empty result sets
    pub bounded_nav: bool,

    /// Upper bound on waiting for the concurrent count query
    pub count_timeout: Duration,
}

impl PageQuery {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            order_by: None,
            debug: false,
            bounded_nav: false,
            count_timeout: DEFAULT_COUNT_TIMEOUT,
        }
    }

    pub fn order_by(mut self, expr: impl Into<String>) -> Self {
        self.order_by = Some(expr.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Opt into clamped navigation semantics (see [`Page`](crate::Page))
    pub fn bounded_nav(mut self, bounded: bool) -> Self {
        self.bounded_nav = bounded;
        self
    }

    pub fn count_timeout(mut self, timeout: Duration) -> Self {
        self.count_timeout = timeout;
        self
    }

    pub(crate) fn effective_page(&self) -> i64 {
        if self.page < 1 {
            DEFAULT_PAGE
        } else {
            self.page
        }
    }

    pub(crate) fn effective_limit(&self) -> i64 {
        if self.limit == 0 {
            DEFAULT_LIMIT
        } else {
            self.limit
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// A filtered SELECT statement ready for paging
///
/// Holds the base statement with all filters and joins already applied.
/// The count statement wraps the base in `SELECT COUNT(*)` so those
/// filters are preserved; pagination and ordering clauses are never shared
/// with it.
#[derive(Debug, Clone)]
pub struct PagedSource {
    sql: String,
}

impl PagedSource {
    pub fn new(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }

    /// The base statement, without pagination clauses
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Statement returning the total row count for the base query
    pub(crate) fn count_statement(&self) -> String {
        format!("SELECT COUNT(*) FROM ({}) AS paged_count", self.sql)
    }

    /// Statement returning one page of rows
    ///
    /// Without `order_by` no ORDER BY clause is appended; row order is then
    /// whatever the engine returns and is not stable across calls.
    pub(crate) fn page_statement(&self, offset: i64, limit: i64, order_by: Option<&str>) -> String {
        match order_by {
            Some(expr) => format!(
                "{} ORDER BY {} LIMIT {} OFFSET {}",
                self.sql, expr, limit, offset
            ),
            None => format!("{} LIMIT {} OFFSET {}", self.sql, limit, offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_below_one_normalizes_to_one() {
        assert_eq!(PageQuery::new(0, 20).effective_page(), 1);
        assert_eq!(PageQuery::new(-3, 20).effective_page(), 1);
        assert_eq!(PageQuery::new(1, 20).effective_page(), 1);
        assert_eq!(PageQuery::new(7, 20).effective_page(), 7);
    }

    #[test]
    fn test_zero_limit_normalizes_to_default() {
        assert_eq!(PageQuery::new(1, 0).effective_limit(), DEFAULT_LIMIT);
        assert_eq!(PageQuery::new(1, 50).effective_limit(), 50);
    }

    #[test]
    fn test_count_statement_preserves_filters() {
        let source = PagedSource::new("SELECT id, name FROM users WHERE active = TRUE");
        assert_eq!(
            source.count_statement(),
            "SELECT COUNT(*) FROM (SELECT id, name FROM users WHERE active = TRUE) AS paged_count"
        );
    }

    #[test]
    fn test_page_statement_without_order_by() {
        let source = PagedSource::new("SELECT id FROM users");
        assert_eq!(
            source.page_statement(40, 20, None),
            "SELECT id FROM users LIMIT 20 OFFSET 40"
        );
    }

    #[test]
    fn test_page_statement_with_order_by() {
        let source = PagedSource::new("SELECT id FROM users");
        assert_eq!(
            source.page_statement(0, 20, Some("created_at DESC")),
            "SELECT id FROM users ORDER BY created_at DESC LIMIT 20 OFFSET 0"
        );
    }
}
