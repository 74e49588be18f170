//! API routes module
//!
//! `routes` is nested under `/api` by `axum_helpers::create_router`;
//! `public_routes` keeps the paths the storefront already calls at the root.

pub mod health;
pub mod images;
pub mod notifications;
pub mod records;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/records", records::router(state))
        .merge(health::router(state.mongo_client.clone()))
}

/// Root-level routes: enquiry, order and image endpoints
pub fn public_routes(state: &AppState) -> eyre::Result<Router> {
    Ok(Router::new()
        .merge(notifications::router(&state.config)?)
        .merge(images::router(state.config.images_dir.clone())))
}
