//! Storage operations generic over `ConnectionTrait`.
//!
//! Callers pick the connection: the pooled `DatabaseConnection` for
//! standalone writes, or a `DatabaseTransaction` when several inserts must
//! land atomically.

use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};

use crate::infra::storage::{city, country};

/// Insert a country row. Does not commit.
pub async fn insert_country<C: ConnectionTrait>(
    conn: &C,
    name: String,
    iso: String,
) -> Result<country::Model, DbErr> {
    country::ActiveModel {
        name: Set(name),
        iso: Set(iso),
        ..Default::default()
    }
    .insert(conn)
    .await
}

/// Insert a city row pointing at an existing country. Does not commit.
pub async fn insert_city<C: ConnectionTrait>(
    conn: &C,
    country_id: i32,
    name: String,
) -> Result<city::Model, DbErr> {
    city::ActiveModel {
        name: Set(name),
        country_id: Set(country_id),
        ..Default::default()
    }
    .insert(conn)
    .await
}
