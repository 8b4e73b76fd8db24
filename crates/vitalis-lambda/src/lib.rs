//! vitalis-lambda
//!
//! HTTP surface for the risk engine. Every handler is a synchronous call into
//! [`vitalis_algorithms::AssessmentEngine`]; nothing is persisted.

pub mod config;
pub mod error;
pub mod middleware;
pub mod narrative;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;

use config::Config;
use state::AppState;

pub fn app(state: AppState, config: &Config) -> Router {
    let layers = ServiceBuilder::new()
        .layer(config.cors_layer())
        .layer(axum_mw::from_fn(middleware::audit::audit_log));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/calculators", get(routes::calculators::list_calculators))
        .route(
            "/calculators/{id}",
            get(routes::calculators::get_calculator_detail),
        )
        .route("/assess", post(routes::assess::assess))
        .route("/predict", post(routes::predict::predict))
        .layer(layers)
        .with_state(state)
}
