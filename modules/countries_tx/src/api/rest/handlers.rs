use std::sync::Arc;

use axum::{http::StatusCode, response::Json, Extension};
use http_problem::ProblemResponse;
use tracing::{error, info};

use crate::api::rest::dto::{CountryDto, CreateCountryReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

/// Create a country and its cities in one transaction
#[utoipa::path(
    post,
    path = "/countries",
    tag = "countries",
    request_body = CreateCountryReq,
    responses(
        (status = 201, description = "Created country with cities", body = CountryDto),
        (status = 400, description = "Validation error", body = http_problem::Problem),
        (status = 500, description = "Internal error", body = http_problem::Problem)
    )
)]
pub async fn create_country(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<CreateCountryReq>,
) -> Result<(StatusCode, Json<CountryDto>), ProblemResponse> {
    info!("Creating country: {:?}", req);

    match svc.create_country(req.into()).await {
        Ok(country) => Ok((StatusCode::CREATED, Json(CountryDto::from(country)))),
        Err(e) => {
            error!("Failed to create country: {}", e);
            Err(map_domain_error(&e, "/countries"))
        }
    }
}
