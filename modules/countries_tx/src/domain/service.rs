use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, instrument};

use crate::contract::model::{City, CountryWithCities, NewCountry};
use crate::domain::error::DomainError;
use crate::infra::storage::ops;

/// Use case for creating a country together with its cities.
///
/// Two entities are written, so the inserts must share one transaction;
/// nothing is committed until every row is in place.
#[derive(Clone)]
pub struct Service {
    db: DatabaseConnection,
}

impl Service {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    #[instrument(name = "countries_tx.service.create_country", skip(self), fields(iso = %new.iso))]
    pub async fn create_country(&self, new: NewCountry) -> Result<CountryWithCities, DomainError> {
        info!(cities = new.cities.len(), "Creating country with cities");

        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::empty_name());
        }
        let iso = normalize_iso(&new.iso)?;
        let cities: Vec<String> = new.cities.iter().map(|c| c.trim().to_string()).collect();
        if cities.iter().any(|c| c.is_empty()) {
            return Err(DomainError::empty_city_name());
        }

        // An uncommitted transaction rolls back when dropped, so any early
        // return below leaves the database untouched.
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        let country = ops::insert_country(&txn, name, iso)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        let mut created_cities = Vec::with_capacity(cities.len());
        for city_name in cities {
            let city = ops::insert_city(&txn, country.id, city_name)
                .await
                .map_err(|e| DomainError::database(e.to_string()))?;
            created_cities.push(City {
                id: city.id,
                name: city.name,
            });
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        debug!(id = country.id, "Country and cities committed");
        Ok(CountryWithCities {
            id: country.id,
            name: country.name,
            iso: country.iso,
            cities: created_cities,
        })
    }
}

/// ISO 3166-1 codes are 2 or 3 ASCII letters; stored uppercase.
fn normalize_iso(iso: &str) -> Result<String, DomainError> {
    let iso = iso.trim();
    if !(2..=3).contains(&iso.len()) || !iso.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::invalid_iso(iso));
    }
    Ok(iso.to_ascii_uppercase())
}
