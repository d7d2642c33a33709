use crate::contract::model::{City, CountryWithCities};
use crate::infra::storage::{city, country};

/// Convert a country row plus its loaded cities to a contract model
impl From<(country::Model, Vec<city::Model>)> for CountryWithCities {
    fn from((country, cities): (country::Model, Vec<city::Model>)) -> Self {
        CountryWithCities {
            id: country.id,
            name: country.name,
            iso: country.iso,
            cities: cities
                .into_iter()
                .map(|c| City {
                    id: c.id,
                    name: c.name,
                })
                .collect(),
        }
    }
}
