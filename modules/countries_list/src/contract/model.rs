/// Country with its cities, as returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryWithCities {
    pub id: i32,
    pub name: String,
    /// ISO 3166-1 code.
    pub iso: String,
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: i32,
    pub name: String,
}
