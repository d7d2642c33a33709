use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::contract::model::{City, CountryWithCities};

/// REST DTO for a country with its cities
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

/// Filter query parameters shared by both list endpoints
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListCountriesQuery {
    /// Comma-separated list of ids to keep
    pub id_in: Option<String>,
    /// Case-insensitive substring match on the name
    pub name_ilike: Option<String>,
    /// Exact ISO code match
    pub iso: Option<String>,
    /// Comma-separated ordering fields; prefix with '-' for descending
    #[param(example = "-name,iso")]
    pub ordering: Option<String>,
}

/// Filter plus page-number parameters for the paginated endpoint
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginatedCountriesQuery {
    #[param(minimum = 1, default = 1)]
    pub page: Option<u64>,
    #[param(minimum = 1, maximum = 100, default = 10)]
    pub page_size: Option<u64>,
    pub id_in: Option<String>,
    pub name_ilike: Option<String>,
    pub iso: Option<String>,
    #[param(example = "-name,iso")]
    pub ordering: Option<String>,
}

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
