use utoipa::OpenApi;

use crate::api::rest::dto::{CountryDto, CreateCountryReq, UpdateCountryReq};

/// OpenAPI documentation for the country CRUD example
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Countries CRUD example",
        description = "Country CRUD without a list endpoint: repositories, use cases, problem responses."
    ),
    tags(
        (name = "countries", description = "Country management endpoints")
    ),
    paths(
        crate::api::rest::handlers::create_country,
        crate::api::rest::handlers::get_country,
        crate::api::rest::handlers::update_country,
        crate::api::rest::handlers::delete_country
    ),
    components(schemas(CountryDto, CreateCountryReq, UpdateCountryReq, http_problem::Problem))
)]
pub struct ApiDoc;
