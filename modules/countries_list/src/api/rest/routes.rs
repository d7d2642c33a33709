use axum::{routing::get, Extension, Router};
use sea_orm::DatabaseConnection;

use crate::api::rest::handlers;

pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/not-paginated-countries", get(handlers::list_countries))
        .route("/paginated-countries", get(handlers::paginated_countries))
        .layer(Extension(db))
}
