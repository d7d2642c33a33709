use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::contract::model::{Country, CountryPatch, NewCountry};

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait CountriesRepository: Send + Sync {
    /// Load a country by id.
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Country>>;
    /// Check uniqueness by ISO code.
    async fn iso_exists(&self, iso: &str) -> anyhow::Result<bool>;
    /// Insert a new country and return the persisted row.
    ///
    /// Service validates and normalizes; repo persists. The returned value
    /// carries the generated primary key.
    async fn insert(&self, new: NewCountry, now: DateTime<Utc>) -> anyhow::Result<Country>;
    /// Apply a partial update to an existing country and return the new row.
    async fn update(
        &self,
        id: i32,
        patch: CountryPatch,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Country>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
