use axum::http::StatusCode;
use http_problem::{Problem, ProblemResponse};

use crate::domain::error::DomainError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    Problem::new(status, title, detail)
        .with_type(format!("https://errors.example.com/{}", code))
        .with_code(code)
        .with_instance(instance)
        .into()
}

/// Map domain error to RFC 9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::CountryNotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "COUNTRIES_NOT_FOUND",
            "Country not found",
            format!("Country with id {} was not found", id),
            instance,
        ),
        DomainError::IsoAlreadyExists { iso } => from_parts(
            StatusCode::CONFLICT,
            "COUNTRIES_ISO_CONFLICT",
            "ISO code already exists",
            format!("ISO code '{}' is already in use", iso),
            instance,
        ),
        DomainError::InvalidIso { .. } | DomainError::EmptyName | DomainError::NameTooLong { .. } => {
            from_parts(
                StatusCode::BAD_REQUEST,
                "COUNTRIES_VALIDATION",
                "Validation error",
                format!("{}", e),
                instance,
            )
        }
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_DB",
                "Internal error",
                "An internal database error occurred",
                instance,
            )
        }
    }
}
