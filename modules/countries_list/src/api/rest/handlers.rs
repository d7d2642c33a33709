use axum::{
    extract::{OriginalUri, Query},
    http::{header, HeaderMap, Uri},
    response::Json,
    Extension,
};
use http_problem::ProblemResponse;
use pagination::{PageNumberPaginator, PageParams, Paginated, SelectFilter};
use sea_orm::{DatabaseConnection, EntityTrait, LoaderTrait, QuerySelect};
use tracing::info;
use url::Url;

use crate::api::rest::dto::{CountryDto, ListCountriesQuery, PaginatedCountriesQuery};
use crate::api::rest::error::{bad_request, map_db_error, map_filter_error};
use crate::contract::model::CountryWithCities;
use crate::domain::filter::CountriesFilter;
use crate::infra::storage::{city, country};

/// Cap for the endpoint that skips pagination entirely.
const NOT_PAGINATED_CAP: u64 = 10;

/// List countries without pagination (capped at 10 rows)
#[utoipa::path(
    get,
    path = "/not-paginated-countries",
    tag = "countries",
    params(ListCountriesQuery),
    responses(
        (status = 200, description = "Filtered countries, at most 10", body = Vec<CountryDto>),
        (status = 400, description = "Invalid filter", body = http_problem::Problem)
    )
)]
pub async fn list_countries(
    Extension(db): Extension<DatabaseConnection>,
    Query(query): Query<ListCountriesQuery>,
) -> Result<Json<Vec<CountryDto>>, ProblemResponse> {
    const INSTANCE: &str = "/not-paginated-countries";
    info!("Listing countries with query: {:?}", query);

    let filter = CountriesFilter::from_query(
        query.id_in.as_deref(),
        query.name_ilike,
        query.iso,
        query.ordering.as_deref(),
    )
    .map_err(|e| map_filter_error(&e, INSTANCE))?;

    // The base query is built here, at the endpoint; the cap replaces the
    // page-size default a paginated endpoint would apply.
    let select = country::Entity::find();
    let select = filter.apply_predicate(select);
    let select = filter.apply_ordering(select);

    let countries = select
        .limit(NOT_PAGINATED_CAP)
        .all(&db)
        .await
        .map_err(|e| map_db_error(&e, INSTANCE))?;

    let dtos = attach_cities(&db, countries, INSTANCE).await?;
    Ok(Json(dtos))
}

/// List countries with page-number pagination
#[utoipa::path(
    get,
    path = "/paginated-countries",
    tag = "countries",
    params(PaginatedCountriesQuery),
    responses(
        (status = 200, description = "One page of filtered countries", body = Paginated<CountryDto>),
        (status = 400, description = "Invalid filter or page parameters", body = http_problem::Problem)
    )
)]
pub async fn paginated_countries(
    Extension(db): Extension<DatabaseConnection>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(query): Query<PaginatedCountriesQuery>,
) -> Result<Json<Paginated<CountryDto>>, ProblemResponse> {
    const INSTANCE: &str = "/paginated-countries";
    info!("Listing paginated countries with query: {:?}", query);

    // Positivity is checked here at the boundary; the paginator assumes it.
    if query.page == Some(0) || query.page_size == Some(0) {
        return Err(bad_request("page and page_size must be positive", INSTANCE));
    }

    let filter = CountriesFilter::from_query(
        query.id_in.as_deref(),
        query.name_ilike,
        query.iso,
        query.ordering.as_deref(),
    )
    .map_err(|e| map_filter_error(&e, INSTANCE))?;

    let params = PageParams::new(query.page, query.page_size);
    let request_url = request_url(&headers, &uri)
        .map_err(|_| bad_request("Malformed request URL", INSTANCE))?;

    let paginator = PageNumberPaginator::new(request_url, params);
    let page = paginator
        .get_page(&db, &filter, country::Entity::find())
        .await
        .map_err(|e| map_db_error(&e, INSTANCE))?;

    let Paginated {
        count,
        next,
        previous,
        results,
    } = page;
    let results = attach_cities(&db, results, INSTANCE).await?;

    Ok(Json(Paginated {
        count,
        next,
        previous,
        results,
    }))
}

/// Batch-load cities for the returned countries (one extra query).
async fn attach_cities(
    db: &DatabaseConnection,
    countries: Vec<country::Model>,
    instance: &str,
) -> Result<Vec<CountryDto>, ProblemResponse> {
    let cities = countries
        .load_many(city::Entity, db)
        .await
        .map_err(|e| map_db_error(&e, instance))?;

    Ok(countries
        .into_iter()
        .zip(cities)
        .map(|pair| CountryDto::from(CountryWithCities::from(pair)))
        .collect())
}

/// Reconstruct the absolute request URL for sibling-page links.
fn request_url(headers: &HeaderMap, uri: &Uri) -> Result<Url, url::ParseError> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    Url::parse(&format!("http://{host}{uri}"))
}
