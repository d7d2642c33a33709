pub mod model;

pub use model::{Country, CountryPatch, NewCountry};
