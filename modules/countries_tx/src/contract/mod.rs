pub mod model;

pub use model::{City, CountryWithCities, NewCountry};
