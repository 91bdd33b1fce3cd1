// Offset/limit pagination over Postgres with a concurrent row count
//
// This crate provides:
// - PagedSource: a filtered SELECT statement ready for paging
// - PageQuery: page/limit/ordering parameters with normalization
// - paginate: runs the page fetch and the total count concurrently and
//   assembles a Page<T> with navigation metadata

pub mod error;
pub mod page;
pub mod paginate;
pub mod query;

pub use error::PaginationError;
pub use page::Page;
pub use paginate::paginate;
pub use query::{PageQuery, PagedSource, DEFAULT_LIMIT, DEFAULT_PAGE};
