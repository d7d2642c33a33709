use axum::http::StatusCode;
use http_problem::{Problem, ProblemResponse};
use sea_orm::DbErr;

use crate::domain::filter::FilterError;

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

/// Malformed filter parameters are a client error.
pub fn map_filter_error(e: &FilterError, instance: &str) -> ProblemResponse {
    from_parts(
        StatusCode::BAD_REQUEST,
        "LIST_FILTER_INVALID",
        "Invalid filter",
        format!("{}", e),
        instance,
    )
}

pub fn bad_request(detail: impl Into<String>, instance: &str) -> ProblemResponse {
    from_parts(
        StatusCode::BAD_REQUEST,
        "LIST_VALIDATION",
        "Validation error",
        detail,
        instance,
    )
}

/// Query failures surface as a generic server error.
pub fn map_db_error(e: &DbErr, instance: &str) -> ProblemResponse {
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
