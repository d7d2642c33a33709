use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Country not found: {id}")]
    CountryNotFound { id: i32 },

    #[error("Country with ISO code '{iso}' already exists")]
    IsoAlreadyExists { iso: String },

    #[error("Invalid ISO 3166-1 code: '{iso}'")]
    InvalidIso { iso: String },

    #[error("Country name cannot be empty")]
    EmptyName,

    #[error("Country name too long: {len} characters (max: {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn country_not_found(id: i32) -> Self {
        Self::CountryNotFound { id }
    }

    pub fn iso_already_exists(iso: impl Into<String>) -> Self {
        Self::IsoAlreadyExists { iso: iso.into() }
    }

    pub fn invalid_iso(iso: impl Into<String>) -> Self {
        Self::InvalidIso { iso: iso.into() }
    }

    pub fn empty_name() -> Self {
        Self::EmptyName
    }

    pub fn name_too_long(len: usize, max: usize) -> Self {
        Self::NameTooLong { len, max }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
