use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, QuerySelect, Select,
};
use url::Url;

use crate::filter::SelectFilter;
use crate::page::{PageParams, Paginated};

/// Page-number paginator over a SeaORM select.
///
/// Constructed per request from the request URL and already-validated page
/// parameters; holds no connection and no shared state.
pub struct PageNumberPaginator {
    request_url: Url,
    params: PageParams,
}

impl PageNumberPaginator {
    pub fn new(request_url: Url, params: PageParams) -> Self {
        Self {
            request_url,
            params,
        }
    }

    /// Produce one page of `select`, filtered and ordered by `filter`.
    ///
    /// The count is taken over the *filtered* query (SeaORM wraps it in a
    /// subquery), never the bare table. Database errors propagate unchanged;
    /// there are no retries.
    pub async fn get_page<C, E, F>(
        &self,
        db: &C,
        filter: &F,
        select: Select<E>,
    ) -> Result<Paginated<E::Model>, DbErr>
    where
        C: ConnectionTrait,
        E: EntityTrait,
        E::Model: FromQueryResult + Sized + Send + Sync + 'static,
        F: SelectFilter<E>,
    {
        let select = filter.apply_predicate(select);
        let select = filter.apply_ordering(select);

        let count = select.clone().count(db).await?;

        let results = select
            .limit(self.params.page_size())
            .offset(self.params.offset())
            .all(db)
            .await?;

        Ok(Paginated {
            count,
            next: self.next_link(count),
            previous: self.previous_link(count),
            results,
        })
    }

    /// Total page count for `count` rows.
    ///
    /// Integer division plus one: an exact multiple of the page size yields
    /// one trailing empty page. Preserved intentionally; the link rules
    /// below are defined against this value.
    pub fn total_pages(&self, count: u64) -> u64 {
        count / self.params.page_size() + 1
    }

    /// Link to the following page, present only while pages remain.
    pub fn next_link(&self, count: u64) -> Option<String> {
        if self.params.page() >= self.total_pages(count) {
            return None;
        }

        Some(with_page(&self.request_url, self.params.page() + 1).to_string())
    }

    /// Link to the preceding page, present only for 1 < page <= total.
    pub fn previous_link(&self, count: u64) -> Option<String> {
        let page = self.params.page();

        if !(1 < page && page <= self.total_pages(count)) {
            return None;
        }

        Some(with_page(&self.request_url, page - 1).to_string())
    }
}

/// Re-serialize `url` with the `page` query parameter set to `page`,
/// preserving every other query parameter.
pub fn with_page(url: &Url, page: u64) -> Url {
    let mut out = url.clone();
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "page")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    {
        let mut pairs = out.query_pairs_mut();
        pairs.clear();
        for (k, v) in &kept {
            pairs.append_pair(k, v);
        }
        pairs.append_pair("page", &page.to_string());
    }

    out
}
