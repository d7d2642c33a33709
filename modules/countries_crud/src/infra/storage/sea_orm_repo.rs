//! SeaORM-backed repository implementation for the domain port.
//!
//! Generic over `C: ConnectionTrait`, so it can be constructed with a
//! `DatabaseConnection` or a transactional connection.

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

use crate::contract::model::{Country, CountryPatch, NewCountry};
use crate::domain::repo::CountriesRepository;
use crate::infra::storage::entity::{ActiveModel as CountryAM, Column, Entity as CountryEntity};

pub struct SeaOrmCountriesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmCountriesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> CountriesRepository for SeaOrmCountriesRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Country>> {
        let found = CountryEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn iso_exists(&self, iso: &str) -> anyhow::Result<bool> {
        let count = CountryEntity::find()
            .filter(Column::Iso.eq(iso))
            .count(&self.conn)
            .await
            .context("iso_exists failed")?;
        Ok(count > 0)
    }

    async fn insert(&self, new: NewCountry, now: DateTime<Utc>) -> anyhow::Result<Country> {
        let m = CountryAM {
            name: Set(new.name),
            iso: Set(new.iso),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let inserted = m.insert(&self.conn).await.context("insert failed")?;
        Ok(inserted.into())
    }

    async fn update(
        &self,
        id: i32,
        patch: CountryPatch,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Country> {
        let mut m = CountryAM {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };
        if let Some(name) = patch.name {
            m.name = Set(name);
        }
        if let Some(iso) = patch.iso {
            m.iso = Set(iso);
        }

        let updated = m.update(&self.conn).await.context("update failed")?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = CountryEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}
