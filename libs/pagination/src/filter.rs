use sea_orm::{EntityTrait, Select};

/// A predicate plus an ordering rule applied to a query before pagination.
///
/// Implemented per concrete filter variant; the paginator only ever sees
/// these two operations, in this order.
pub trait SelectFilter<E: EntityTrait> {
    /// Narrow the query with the filter's predicate clauses.
    fn apply_predicate(&self, select: Select<E>) -> Select<E>;

    /// Apply the filter's ordering to the query.
    fn apply_ordering(&self, select: Select<E>) -> Select<E>;
}

/// Pass-through filter for endpoints that paginate an unfiltered query.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl<E: EntityTrait> SelectFilter<E> for NoFilter {
    fn apply_predicate(&self, select: Select<E>) -> Select<E> {
        select
    }

    fn apply_ordering(&self, select: Select<E>) -> Select<E> {
        select
    }
}
