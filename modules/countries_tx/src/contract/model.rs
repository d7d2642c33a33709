/// Country aggregate returned after a successful creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryWithCities {
    pub id: i32,
    pub name: String,
    /// ISO 3166-1 code, stored uppercase.
    pub iso: String,
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: i32,
    pub name: String,
}

/// Data for creating a country together with its cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCountry {
    pub name: String,
    pub iso: String,
    pub cities: Vec<String>,
}
