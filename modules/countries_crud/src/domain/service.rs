use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::contract::model::{Country, CountryPatch, NewCountry};
use crate::domain::error::DomainError;
use crate::domain::repo::CountriesRepository;

const MAX_NAME_LENGTH: usize = 200;

/// Domain service with the country use cases.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn CountriesRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn CountriesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "countries_crud.service.create_country", skip(self), fields(iso = %new.iso))]
    pub async fn create_country(&self, new: NewCountry) -> Result<Country, DomainError> {
        info!("Creating country");

        let new = NewCountry {
            name: new.name.trim().to_string(),
            iso: normalize_iso(&new.iso)?,
        };
        validate_name(&new.name)?;

        if self
            .repo
            .iso_exists(&new.iso)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
        {
            return Err(DomainError::iso_already_exists(new.iso));
        }

        let country = self
            .repo
            .insert(new, Utc::now())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!(id = country.id, "Country created");
        Ok(country)
    }

    #[instrument(name = "countries_crud.service.get_country", skip(self))]
    pub async fn get_country(&self, id: i32) -> Result<Country, DomainError> {
        debug!("Getting country by id");

        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::country_not_found(id))
    }

    #[instrument(name = "countries_crud.service.update_country", skip(self, patch))]
    pub async fn update_country(
        &self,
        id: i32,
        patch: CountryPatch,
    ) -> Result<Country, DomainError> {
        info!("Updating country");

        let existing = self.get_country(id).await?;

        let patch = CountryPatch {
            name: patch.name.map(|n| n.trim().to_string()),
            iso: patch.iso.as_deref().map(normalize_iso).transpose()?,
        };
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(iso) = &patch.iso {
            if *iso != existing.iso
                && self
                    .repo
                    .iso_exists(iso)
                    .await
                    .map_err(|e| DomainError::database(e.to_string()))?
            {
                return Err(DomainError::iso_already_exists(iso.clone()));
            }
        }

        self.repo
            .update(id, patch, Utc::now())
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    #[instrument(name = "countries_crud.service.delete_country", skip(self))]
    pub async fn delete_country(&self, id: i32) -> Result<(), DomainError> {
        info!("Deleting country");

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        if !deleted {
            return Err(DomainError::country_not_found(id));
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::empty_name());
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(DomainError::name_too_long(name.len(), MAX_NAME_LENGTH));
    }
    Ok(())
}

/// ISO 3166-1 codes are 2 or 3 ASCII letters; stored uppercase.
fn normalize_iso(iso: &str) -> Result<String, DomainError> {
    let iso = iso.trim();
    if !(2..=3).contains(&iso.len()) || !iso.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::invalid_iso(iso));
    }
    Ok(iso.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::normalize_iso;

    #[test]
    fn iso_is_trimmed_and_uppercased() {
        assert_eq!(normalize_iso(" fi ").unwrap(), "FI");
        assert_eq!(normalize_iso("swe").unwrap(), "SWE");
    }

    #[test]
    fn iso_rejects_wrong_shapes() {
        assert!(normalize_iso("").is_err());
        assert!(normalize_iso("F").is_err());
        assert!(normalize_iso("F1").is_err());
        assert!(normalize_iso("ABCD").is_err());
    }
}
