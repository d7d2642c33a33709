use std::sync::Arc;

use axum::{routing::post, Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/countries", post(handlers::create_country))
        .layer(Extension(service))
}
