use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{City, CountryWithCities, NewCountry};

/// REST DTO for a created country with its cities
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
    /// ISO 3166-1 code
    pub iso: String,
    pub cities: Vec<CityDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CityDto {
    pub id: i32,
    pub name: String,
}

/// REST DTO for creating a country together with its cities
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCountryReq {
    pub name: String,
    pub iso: String,
    /// City names to create alongside the country
    #[serde(default)]
    pub cities: Vec<String>,
}

// Conversions between REST DTOs and contract models

impl From<CountryWithCities> for CountryDto {
    fn from(country: CountryWithCities) -> Self {
        Self {
            id: country.id,
            name: country.name,
            iso: country.iso,
            cities: country.cities.into_iter().map(CityDto::from).collect(),
        }
    }
}

impl From<City> for CityDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
        }
    }
}

impl From<CreateCountryReq> for NewCountry {
    fn from(req: CreateCountryReq) -> Self {
        Self {
            name: req.name,
            iso: req.iso,
            cities: req.cities,
        }
    }
}
