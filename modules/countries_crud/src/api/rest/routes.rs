use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/countries", post(handlers::create_country))
        .route(
            "/countries/{id}",
            get(handlers::get_country)
                .patch(handlers::update_country)
                .delete(handlers::delete_country),
        )
        .layer(Extension(service))
}
