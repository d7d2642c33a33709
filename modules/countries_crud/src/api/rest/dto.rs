use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{Country, CountryPatch, NewCountry};

/// REST DTO for country representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
    /// ISO 3166-1 code
    pub iso: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// REST DTO for creating a new country
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCountryReq {
    pub name: String,
    pub iso: String,
}

/// REST DTO for updating a country (partial)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateCountryReq {
    pub name: Option<String>,
    pub iso: Option<String>,
}

// Conversions between REST DTOs and contract models

impl From<Country> for CountryDto {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            name: country.name,
            iso: country.iso,
            created_at: country.created_at,
            updated_at: country.updated_at,
        }
    }
}

impl From<CreateCountryReq> for NewCountry {
    fn from(req: CreateCountryReq) -> Self {
        Self {
            name: req.name,
            iso: req.iso,
        }
    }
}

impl From<UpdateCountryReq> for CountryPatch {
    fn from(req: UpdateCountryReq) -> Self {
        Self {
            name: req.name,
            iso: req.iso,
        }
    }
}
