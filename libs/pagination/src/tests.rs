use url::Url;

use super::*;

fn paginator(url: &str, page: u64, page_size: u64) -> PageNumberPaginator {
    PageNumberPaginator::new(
        Url::parse(url).unwrap(),
        PageParams::new(Some(page), Some(page_size)),
    )
}

#[test]
fn page_params_defaults() {
    let params = PageParams::new(None, None);
    assert_eq!(params.page(), 1);
    assert_eq!(params.page_size(), 10);
}

#[test]
fn page_size_clamped_to_max() {
    let params = PageParams::new(Some(1), Some(500));
    assert_eq!(params.page_size(), MAX_PAGE_SIZE);

    // At the limit nothing changes.
    let params = PageParams::new(Some(1), Some(100));
    assert_eq!(params.page_size(), 100);
}

#[test]
fn offset_is_page_minus_one_times_size() {
    assert_eq!(PageParams::new(Some(1), Some(10)).offset(), 0);
    assert_eq!(PageParams::new(Some(3), Some(10)).offset(), 20);
    assert_eq!(PageParams::new(Some(5), Some(25)).offset(), 100);
}

#[test]
fn total_pages_uses_integer_division_plus_one() {
    let p = paginator("http://testserver/countries", 1, 10);
    assert_eq!(p.total_pages(25), 3);
    assert_eq!(p.total_pages(0), 1);
    // Exact multiples produce one trailing page; pinned on purpose.
    assert_eq!(p.total_pages(20), 3);
}

#[test]
fn first_page_of_three_has_next_only() {
    // count=25, size=10, page=1 -> pages 1..3
    let p = paginator("http://testserver/countries?page=1", 1, 10);
    let next = p.next_link(25).expect("next expected");
    assert!(next.ends_with("page=2"), "got {next}");
    assert_eq!(p.previous_link(25), None);
}

#[test]
fn middle_page_has_both_links() {
    let p = paginator("http://testserver/countries?page=2", 2, 10);
    assert!(p.next_link(25).unwrap().ends_with("page=3"));
    assert!(p.previous_link(25).unwrap().ends_with("page=1"));
}

#[test]
fn second_page_of_fifteen_has_previous_only() {
    // count=15, size=10 -> total_pages = 2, so page 2 is the last page.
    let p = paginator("http://testserver/countries?page=2", 2, 10);
    assert_eq!(p.next_link(15), None);
    assert!(p.previous_link(15).unwrap().ends_with("page=1"));
}

#[test]
fn empty_result_has_no_links() {
    let p = paginator("http://testserver/countries", 1, 10);
    assert_eq!(p.total_pages(0), 1);
    assert_eq!(p.next_link(0), None);
    assert_eq!(p.previous_link(0), None);
}

#[test]
fn page_past_the_end_has_no_links() {
    // previous requires page <= total_pages as well.
    let p = paginator("http://testserver/countries?page=9", 9, 10);
    assert_eq!(p.next_link(15), None);
    assert_eq!(p.previous_link(15), None);
}

#[test]
fn with_page_replaces_only_the_page_parameter() {
    let url = Url::parse("http://testserver/countries?name_ilike=land&page=2&iso=FI").unwrap();
    let next = with_page(&url, 3);

    assert_eq!(next.path(), "/countries");
    let pairs: Vec<(String, String)> = next
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("name_ilike".into(), "land".into())));
    assert!(pairs.contains(&("iso".into(), "FI".into())));
    assert!(pairs.contains(&("page".into(), "3".into())));
    assert_eq!(pairs.len(), 3);
}

#[test]
fn with_page_adds_page_when_absent() {
    let url = Url::parse("http://testserver/countries?iso=FI").unwrap();
    assert_eq!(
        with_page(&url, 2).as_str(),
        "http://testserver/countries?iso=FI&page=2"
    );
}

mod db {
    use sea_orm::entity::prelude::*;
    use sea_orm::{ColumnTrait, Database, QueryFilter, QueryOrder, Set};
    use url::Url;

    use crate::{NoFilter, PageNumberPaginator, PageParams, SelectFilter};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "item")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub value: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    struct MinValue(i32);

    impl SelectFilter<Entity> for MinValue {
        fn apply_predicate(&self, select: Select<Entity>) -> Select<Entity> {
            select.filter(Column::Value.gte(self.0))
        }

        fn apply_ordering(&self, select: Select<Entity>) -> Select<Entity> {
            select.order_by_desc(Column::Value)
        }
    }

    async fn seeded_db(rows: i32) -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("connect to in-memory sqlite");
        db.execute_unprepared(
            "CREATE TABLE item (id INTEGER PRIMARY KEY AUTOINCREMENT, value INTEGER NOT NULL)",
        )
        .await
        .expect("create table");

        for value in 1..=rows {
            ActiveModel {
                value: Set(value),
                ..Default::default()
            }
            .insert(&db)
            .await
            .expect("insert row");
        }

        db
    }

    fn paginator(page: u64, page_size: u64) -> PageNumberPaginator {
        PageNumberPaginator::new(
            Url::parse("http://testserver/items").unwrap(),
            PageParams::new(Some(page), Some(page_size)),
        )
    }

    #[tokio::test]
    async fn page_is_the_offset_window_of_the_ordered_set() {
        let db = seeded_db(25).await;

        let page = paginator(2, 10)
            .get_page(&db, &NoFilter, Entity::find().order_by_asc(Column::Value))
            .await
            .unwrap();

        assert_eq!(page.count, 25);
        let values: Vec<i32> = page.results.iter().map(|m| m.value).collect();
        assert_eq!(values, (11..=20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn count_reflects_the_filter_not_the_table() {
        let db = seeded_db(25).await;

        let page = paginator(1, 10)
            .get_page(&db, &MinValue(21), Entity::find())
            .await
            .unwrap();

        // 21..=25 survive the predicate, descending order.
        assert_eq!(page.count, 5);
        let values: Vec<i32> = page.results.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![25, 24, 23, 22, 21]);
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
    }

    #[tokio::test]
    async fn oversized_page_size_is_clamped_but_count_is_not() {
        let db = seeded_db(120).await;

        let page = paginator(1, 1000)
            .get_page(&db, &NoFilter, Entity::find().order_by_asc(Column::Id))
            .await
            .unwrap();

        assert_eq!(page.count, 120);
        assert_eq!(page.results.len(), 100);
        assert!(page.next.is_some());
    }
}
