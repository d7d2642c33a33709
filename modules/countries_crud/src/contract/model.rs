use chrono::{DateTime, Utc};

/// Pure country model (no serde, no ORM types).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: i32,
    pub name: String,
    /// ISO 3166-1 code, stored uppercase.
    pub iso: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCountry {
    pub name: String,
    pub iso: String,
}

/// Partial update data for a country.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryPatch {
    pub name: Option<String>,
    pub iso: Option<String>,
}
