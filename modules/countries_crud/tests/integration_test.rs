use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

use countries_crud::{
    api::rest::routes,
    contract::model::{CountryPatch, NewCountry},
    domain::error::DomainError,
    domain::service::Service,
    infra::storage::{Migrator, SeaOrmCountriesRepository},
};

/// Create a fresh test database for each test
async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test domain service
async fn create_test_service() -> Arc<Service> {
    let db = create_test_db().await;
    let repo = Arc::new(SeaOrmCountriesRepository::new(db));
    Arc::new(Service::new(repo))
}

fn new_country(name: &str, iso: &str) -> NewCountry {
    NewCountry {
        name: name.to_string(),
        iso: iso.to_string(),
    }
}

#[tokio::test]
async fn test_domain_service_crud() -> Result<()> {
    let service = create_test_service().await;

    // Create
    let created = service.create_country(new_country("Finland", "fi")).await?;
    assert_eq!(created.name, "Finland");
    assert_eq!(created.iso, "FI"); // normalized uppercase

    // Get
    let retrieved = service.get_country(created.id).await?;
    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, created.name);

    // Update (partial)
    let patch = CountryPatch {
        name: Some("Republic of Finland".to_string()),
        iso: None,
    };
    let updated = service.update_country(created.id, patch).await?;
    assert_eq!(updated.name, "Republic of Finland");
    assert_eq!(updated.iso, "FI"); // Unchanged
    assert!(updated.updated_at >= created.updated_at);

    // Delete
    service.delete_country(created.id).await?;
    let result = service.get_country(created.id).await;
    assert!(matches!(result, Err(DomainError::CountryNotFound { .. })));

    Ok(())
}

#[tokio::test]
async fn test_duplicate_iso_is_a_conflict() -> Result<()> {
    let service = create_test_service().await;

    service.create_country(new_country("Finland", "FI")).await?;
    let result = service.create_country(new_country("Fintopia", "fi")).await;

    assert!(matches!(result, Err(DomainError::IsoAlreadyExists { .. })));
    Ok(())
}

#[tokio::test]
async fn test_validation_rejects_bad_input() -> Result<()> {
    let service = create_test_service().await;

    let result = service.create_country(new_country("  ", "FI")).await;
    assert!(matches!(result, Err(DomainError::EmptyName)));

    let result = service.create_country(new_country("Finland", "F1")).await;
    assert!(matches!(result, Err(DomainError::InvalidIso { .. })));

    Ok(())
}

#[tokio::test]
async fn test_update_missing_country_is_not_found() -> Result<()> {
    let service = create_test_service().await;

    let result = service.update_country(4242, CountryPatch::default()).await;
    assert!(matches!(result, Err(DomainError::CountryNotFound { .. })));

    let result = service.delete_country(4242).await;
    assert!(matches!(result, Err(DomainError::CountryNotFound { .. })));

    Ok(())
}

#[tokio::test]
async fn test_http_crud_roundtrip() -> Result<()> {
    let app = routes::router(create_test_service().await);

    // POST /countries -> 201 with the persisted body
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/countries")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Sweden","iso":"se"}"#))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let created: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(created["name"], "Sweden");
    assert_eq!(created["iso"], "SE");
    let id = created["id"].as_i64().unwrap();

    // GET /countries/{id} -> 200
    let response = app
        .clone()
        .oneshot(Request::builder().uri(format!("/countries/{id}")).body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    // PATCH /countries/{id} -> 200
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/countries/{id}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Kingdom of Sweden"}"#))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    // DELETE /countries/{id} -> 204, second delete -> 404 problem
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/countries/{id}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/countries/{id}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/problem+json")
    );

    Ok(())
}
