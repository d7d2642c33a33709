use pagination::Paginated;
use utoipa::OpenApi;

use crate::api::rest::dto::{CityDto, CountryDto};

/// OpenAPI documentation for the filtered listing example
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Countries list example",
        description = "Filtered country listing with page-number pagination and sibling-page links."
    ),
    tags(
        (name = "countries", description = "Country listing endpoints")
    ),
    paths(
        crate::api::rest::handlers::list_countries,
        crate::api::rest::handlers::paginated_countries
    ),
    components(schemas(CountryDto, CityDto, Paginated<CountryDto>, http_problem::Problem))
)]
pub struct ApiDoc;
