// Pagination result assembly
//
// The navigation fields reproduce the behavior API clients already depend
// on. In particular, with the default semantics an empty result set yields
// `next_page == page + 1`: `page` is at least 1 while `total_page` is 0,
// so the last-page equality never holds. The `bounded_nav` flag switches
// to clamped navigation for callers that want `next_page` to stay inside
// the real page range.

use serde::Serialize;

/// One page of rows plus navigation metadata
///
/// Serializes with the exact field names consumed by API clients:
/// `total_record, total_page, data, offset, limit, page, prev_page,
/// next_page`.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub total_record: i64,
    pub total_page: i64,
    pub data: Vec<T>,
    pub offset: i64,
    pub limit: i64,
    pub page: i64,
    pub prev_page: i64,
    pub next_page: i64,
}

impl<T> Page<T> {
    /// Assemble a page from fetched rows and the joined row count
    ///
    /// `page` and `limit` must already be normalized (page >= 1,
    /// limit > 0).
    pub fn assemble(data: Vec<T>, total_record: i64, page: i64, limit: i64, bounded_nav: bool) -> Self {
        let offset = if page == 1 { 0 } else { (page - 1) * limit };
        let total_page = (total_record + limit - 1) / limit;

        let prev_page = if page > 1 { page - 1 } else { page };
        let next_page = if bounded_nav {
            (page + 1).min(total_page.max(1))
        } else if page == total_page {
            page
        } else {
            page + 1
        };

        Self {
            total_record,
            total_page,
            data,
            offset,
            limit,
            page,
            prev_page,
            next_page,
        }
    }

    /// Whether this page holds no rows
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble_empty(total_record: i64, page: i64, limit: i64) -> Page<i32> {
        Page::assemble(Vec::new(), total_record, page, limit, false)
    }

    #[test]
    fn test_first_page_has_zero_offset() {
        let page = assemble_empty(45, 1, 20);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_offset_is_page_minus_one_times_limit() {
        assert_eq!(assemble_empty(100, 2, 20).offset, 20);
        assert_eq!(assemble_empty(100, 5, 10).offset, 40);
    }

    #[test]
    fn test_total_page_is_ceiling_of_count_over_limit() {
        assert_eq!(assemble_empty(45, 1, 20).total_page, 3);
        assert_eq!(assemble_empty(40, 1, 20).total_page, 2);
        assert_eq!(assemble_empty(1, 1, 20).total_page, 1);
        assert_eq!(assemble_empty(0, 1, 20).total_page, 0);
    }

    #[test]
    fn test_scenario_first_of_three_pages() {
        let page = assemble_empty(45, 1, 20);
        assert_eq!(page.total_page, 3);
        assert_eq!(page.offset, 0);
        assert_eq!(page.prev_page, 1);
        assert_eq!(page.next_page, 2);
    }

    #[test]
    fn test_scenario_last_of_three_pages() {
        let page = assemble_empty(45, 3, 20);
        assert_eq!(page.offset, 40);
        assert_eq!(page.prev_page, 2);
        // on the last page next_page stays put
        assert_eq!(page.next_page, 3);
    }

    #[test]
    fn test_scenario_middle_page_advances() {
        let page = assemble_empty(45, 2, 20);
        assert_eq!(page.prev_page, 1);
        assert_eq!(page.next_page, 3);
    }

    #[test]
    fn test_empty_result_keeps_legacy_next_page() {
        // total_page is 0 while page is 1, so the last-page equality never
        // holds and next_page advances past the (nonexistent) data. Looks
        // wrong, is the contract.
        let page = assemble_empty(0, 1, 20);
        assert_eq!(page.total_page, 0);
        assert_eq!(page.prev_page, 1);
        assert_eq!(page.next_page, 2);
    }

    #[test]
    fn test_bounded_nav_clamps_empty_result() {
        let page: Page<i32> = Page::assemble(Vec::new(), 0, 1, 20, true);
        assert_eq!(page.next_page, 1);
    }

    #[test]
    fn test_bounded_nav_matches_legacy_on_real_pages() {
        let first: Page<i32> = Page::assemble(Vec::new(), 45, 1, 20, true);
        assert_eq!(first.next_page, 2);

        let last: Page<i32> = Page::assemble(Vec::new(), 45, 3, 20, true);
        assert_eq!(last.next_page, 3);
    }

    #[test]
    fn test_data_passes_through_in_order() {
        let page = Page::assemble(vec![10, 20, 30], 3, 1, 20, false);
        assert_eq!(page.data, vec![10, 20, 30]);
        assert!(!page.is_empty());
    }

    #[test]
    fn test_serializes_with_contract_field_names() {
        let page = Page::assemble(vec![1, 2], 45, 2, 20, false);
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(value["total_record"], 45);
        assert_eq!(value["total_page"], 3);
        assert_eq!(value["data"], serde_json::json!([1, 2]));
        assert_eq!(value["offset"], 20);
        assert_eq!(value["limit"], 20);
        assert_eq!(value["page"], 2);
        assert_eq!(value["prev_page"], 1);
        assert_eq!(value["next_page"], 3);
    }
}
