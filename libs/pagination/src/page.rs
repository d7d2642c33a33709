use serde::Serialize;
use utoipa::ToSchema;

/// Default page number when not specified in the request.
pub const DEFAULT_PAGE: u64 = 1;

/// Default number of items per page when not specified in the request.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Maximum allowed items per page; larger requests are clamped, not rejected.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Validated page-number request: 1-based page plus page size.
///
/// Callers validate positivity at the HTTP boundary; `new` only applies
/// defaults and the silent `MAX_PAGE_SIZE` clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: u64,
    page_size: u64,
}

impl PageParams {
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus sibling-page links and the filtered total.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Paginated<M> {
    /// Total number of rows matching the filter, across all pages.
    pub count: u64,
    /// Absolute URL of the next page, when one exists.
    pub next: Option<String>,
    /// Absolute URL of the previous page, when one exists.
    pub previous: Option<String>,
    /// Items of the current page, in filter order.
    pub results: Vec<M>,
}

impl<M> Paginated<M> {
    /// Map items while keeping count and links (entity -> DTO convenience).
    pub fn map_results<U>(self, mut f: impl FnMut(M) -> U) -> Paginated<U> {
        Paginated {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(&mut f).collect(),
        }
    }
}
