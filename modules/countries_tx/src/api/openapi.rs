use utoipa::OpenApi;

use crate::api::rest::dto::{CityDto, CountryDto, CreateCountryReq};

/// OpenAPI documentation for the transactional creation example
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Countries transactional-create example",
        description = "Creates a country and its cities atomically in one database transaction."
    ),
    tags(
        (name = "countries", description = "Country creation endpoints")
    ),
    paths(crate::api::rest::handlers::create_country),
    components(schemas(CountryDto, CityDto, CreateCountryReq, http_problem::Problem))
)]
pub struct ApiDoc;
