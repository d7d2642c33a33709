use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, response::Json, Extension};
use http_problem::ProblemResponse;
use tracing::{error, info};

use crate::api::rest::dto::{CountryDto, CreateCountryReq, UpdateCountryReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

/// Create a new country
#[utoipa::path(
    post,
    path = "/countries",
    tag = "countries",
    request_body = CreateCountryReq,
    responses(
        (status = 201, description = "Created country", body = CountryDto),
        (status = 400, description = "Validation error", body = http_problem::Problem),
        (status = 409, description = "ISO code already exists", body = http_problem::Problem)
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

/// Get a specific country by ID
#[utoipa::path(
    get,
    path = "/countries/{id}",
    tag = "countries",
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Country found", body = CountryDto),
        (status = 404, description = "Not found", body = http_problem::Problem)
    )
)]
pub async fn get_country(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<Json<CountryDto>, ProblemResponse> {
    info!("Getting country with id: {}", id);

    match svc.get_country(id).await {
        Ok(country) => Ok(Json(CountryDto::from(country))),
        Err(e) => {
            error!("Failed to get country {}: {}", id, e);
            Err(map_domain_error(&e, &format!("/countries/{id}")))
        }
    }
}

/// Update an existing country with partial data
#[utoipa::path(
    patch,
    path = "/countries/{id}",
    tag = "countries",
    params(("id" = i32, Path, description = "Country ID")),
    request_body = UpdateCountryReq,
    responses(
        (status = 200, description = "Updated country", body = CountryDto),
        (status = 400, description = "Validation error", body = http_problem::Problem),
        (status = 404, description = "Not found", body = http_problem::Problem),
        (status = 409, description = "ISO code already exists", body = http_problem::Problem)
    )
)]
pub async fn update_country(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateCountryReq>,
) -> Result<Json<CountryDto>, ProblemResponse> {
    info!("Updating country {} with: {:?}", id, req);

    match svc.update_country(id, req.into()).await {
        Ok(country) => Ok(Json(CountryDto::from(country))),
        Err(e) => {
            error!("Failed to update country {}: {}", id, e);
            Err(map_domain_error(&e, &format!("/countries/{id}")))
        }
    }
}

/// Delete a country by ID
#[utoipa::path(
    delete,
    path = "/countries/{id}",
    tag = "countries",
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 204, description = "Country deleted"),
        (status = 404, description = "Not found", body = http_problem::Problem)
    )
)]
pub async fn delete_country(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting country: {}", id);

    match svc.delete_country(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete country {}: {}", id, e);
            Err(map_domain_error(&e, &format!("/countries/{id}")))
        }
    }
}
