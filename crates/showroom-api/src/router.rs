//! Route definitions for the Showroom HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::Router;
use axum::routing::{delete, get, patch, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and layers.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(copy_routes())
        .merge(library_routes())
        .merge(project_routes())
        .merge(company_routes())
        .route("/health", get(handlers::health::health));

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Share code issue and redeem
fn copy_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/copies/libraries/{library_id}",
            post(handlers::copy::issue_code),
        )
        .route("/copies/redeem/{code}", post(handlers::copy::redeem_code))
}

/// Library counters, listing, and cascade delete
fn library_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/libraries/{library_id}",
            delete(handlers::library::delete_library),
        )
        .route(
            "/libraries/{library_id}/project-count",
            patch(handlers::library::recount_projects),
        )
        .route(
            "/libraries/{library_id}/projects",
            get(handlers::library::list_projects),
        )
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", post(handlers::project::create_project))
        .route(
            "/projects/{project_id}",
            delete(handlers::project::delete_project),
        )
}

fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies/{company_id}",
            get(handlers::company::get_company),
        )
        .route(
            "/companies/{company_id}/statistics",
            get(handlers::company::statistics),
        )
}
