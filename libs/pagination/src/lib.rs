//! Page-number pagination for SeaORM selects.
//!
//! The paginator is request-scoped: it is built from the incoming request's
//! URL and page parameters, produces exactly one page, and is dropped. It
//! issues two database round trips per call (a count over the filtered
//! query, then a limit/offset fetch) and performs no mutation.

mod filter;
mod page;
mod paginator;

pub use filter::{NoFilter, SelectFilter};
pub use page::{PageParams, Paginated, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use paginator::{with_page, PageNumberPaginator};

#[cfg(test)]
mod tests;
