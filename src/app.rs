use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/species", get(handlers::get_species))
        .route("/api/boroughs", get(handlers::get_boroughs))
        .route("/api/chart/health", get(handlers::get_health_chart))
        .route("/api/chart/steward", get(handlers::get_steward_chart))
        .with_state(state)
}
