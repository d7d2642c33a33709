use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use clap::ValueEnum;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use utoipa::OpenApi;

/// Which example module this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExampleKind {
    /// Country CRUD without a list endpoint
    Crud,
    /// Transactional creation of a country with its cities
    Tx,
    /// Filtered and paginated listing
    List,
}

/// Run the selected module's migrations and build its router, including the
/// `/api-docs/openapi.json` document route.
pub async fn build_router(kind: ExampleKind, db: DatabaseConnection) -> Result<Router> {
    match kind {
        ExampleKind::Crud => {
            countries_crud::infra::storage::Migrator::up(&db, None)
                .await
                .context("running countries_crud migrations")?;

            let repo = Arc::new(countries_crud::infra::storage::SeaOrmCountriesRepository::new(
                db,
            ));
            let service = Arc::new(countries_crud::domain::service::Service::new(repo));

            let doc = countries_crud::api::openapi::ApiDoc::openapi();
            Ok(countries_crud::api::rest::routes::router(service)
                .route(
                "/api-docs/openapi.json",
                get(move || {
                    let doc = doc.clone();
                    async move { Json(doc) }
                }),
            ))
        }
        ExampleKind::Tx => {
            countries_tx::infra::storage::Migrator::up(&db, None)
                .await
                .context("running countries_tx migrations")?;

            let service = Arc::new(countries_tx::domain::service::Service::new(db));

            let doc = countries_tx::api::openapi::ApiDoc::openapi();
            Ok(countries_tx::api::rest::routes::router(service)
                .route(
                "/api-docs/openapi.json",
                get(move || {
                    let doc = doc.clone();
                    async move { Json(doc) }
                }),
            ))
        }
        ExampleKind::List => {
            countries_list::infra::storage::Migrator::up(&db, None)
                .await
                .context("running countries_list migrations")?;

            let doc = countries_list::api::openapi::ApiDoc::openapi();
            Ok(countries_list::api::rest::routes::router(db)
                .route(
                "/api-docs/openapi.json",
                get(move || {
                    let doc = doc.clone();
                    async move { Json(doc) }
                }),
            ))
        }
    }
}
