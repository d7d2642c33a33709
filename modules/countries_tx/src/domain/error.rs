use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Country name cannot be empty")]
    EmptyName,

    #[error("Invalid ISO 3166-1 code: '{iso}'")]
    InvalidIso { iso: String },

    #[error("City name cannot be empty")]
    EmptyCityName,

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn empty_name() -> Self {
        Self::EmptyName
    }

    pub fn invalid_iso(iso: impl Into<String>) -> Self {
        Self::InvalidIso { iso: iso.into() }
    }

    pub fn empty_city_name() -> Self {
        Self::EmptyCityName
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
