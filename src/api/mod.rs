//! API handlers for MediaLibs REST endpoints

pub mod adverts;
pub mod advertisers;
pub mod auth;
pub mod health;
pub mod loans;
pub mod medias;
pub mod openapi;
pub mod resource;
pub mod stocks;
pub mod users;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Base path of every resource collection
pub const SERVICES_BASE: &str = "/api/v1/services";

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let services = Router::new()
        .merge(adverts::routes())
        .merge(advertisers::routes())
        .merge(loans::routes())
        .merge(medias::routes())
        .merge(stocks::routes())
        .merge(stocks::adjustment_routes())
        .merge(users::routes())
        .merge(auth::routes());

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/services", services)
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
